mod commands;
mod config;
mod currency;
mod errors;
mod gui;
mod models;
mod prompt;
mod report;
mod storage;
mod store;
mod utils;

use clap::Parser;
use iced::{window, Size};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let config = config::AppConfig::parse();
    init_tracing(&config.log_filter);

    iced::application(
        "Employee Salary Management System",
        gui::SalaryDeskApp::update,
        gui::SalaryDeskApp::view,
    )
    .subscription(gui::SalaryDeskApp::subscription)
    .window(window::Settings {
        size: Size::new(1200.0, 760.0),
        resizable: true,
        ..window::Settings::default()
    })
    .run_with(move || gui::SalaryDeskApp::new(config))
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
