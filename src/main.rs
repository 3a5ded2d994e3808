#![allow(warnings)]
//! Writeups Site Frontend Entry Point

mod config;
mod models;
mod dates;
mod filter;
mod prefs;
mod route;
mod error;
mod feed;
mod store;
mod markdown;
mod enhance;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(console_logger::default_level());

    let mounted = app::mount_views();
    log::info!("Mounted {} views", mounted);
    mount_to_body(App);
}
