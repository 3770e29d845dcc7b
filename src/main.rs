mod api;
mod baseline;
mod districts;
mod extract;
mod resolver;
mod retry;
mod settings;
mod suggest;
mod web;

use std::process::exit;
use std::sync::Arc;

use clap::Parser;

use crate::districts::DistrictSet;
use crate::extract::GeminiClient;
use crate::resolver::Extract;
use crate::settings::{Args, Settings};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let settings = match Settings::from_file(&args.config) {
        Ok(ret) => ret,
        Err(error) => {
            eprintln!("Problem while loading settings. {error}");
            exit(1);
        }
    };

    let extractor: Arc<dyn Extract> = match GeminiClient::new(&settings.extraction) {
        Ok(client) => Arc::new(client),
        Err(error) => {
            eprintln!("Problem while building the extraction client. {error}");
            exit(1);
        }
    };

    let schema = api::schema(DistrictSet::uttar_pradesh(), extractor);
    web::serve(schema, settings.web.address).await;
}
