pub mod epoch_client;
