// PWA 图标生成库入口
pub mod config;
pub mod generator;
pub mod models;
pub mod render;
pub mod utils;
