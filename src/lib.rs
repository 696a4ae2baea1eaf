pub mod anchor;
pub mod config;
pub mod controller;
pub mod dom;
pub mod header;
pub mod hero;
pub mod nav;
pub mod reveal;
pub mod timeline;
pub mod year;

pub mod reviews {
    pub mod api;
    pub mod board;
    pub mod form;
    pub mod models;
    pub mod population;
    pub mod render;
}
