use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct DownloadedImage {
    pub file_name: String,
    pub data: Bytes,
}
