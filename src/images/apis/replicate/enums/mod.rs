pub mod replicate_prediction_status;
