use bytes::Bytes;

pub async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Bytes, reqwest::Error> {
    match client.get(url).send().await {
        Ok(res) => match res.error_for_status() {
            Ok(res) => res.bytes().await,
            Err(e) => {
                tracing::error!(%e, "non-success status fetching bytes");
                Err(e)
            }
        },
        Err(e) => {
            tracing::error!(%e, "failed to get url response");
            Err(e)
        }
    }
}
