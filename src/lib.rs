pub mod achievements;
pub mod app;
pub mod catalog;
pub mod chart;
pub mod code_utils;
pub mod config;
pub mod data;
pub mod error;
pub mod keymap;
pub mod model;
pub mod navigation;
pub mod notifications;
pub mod particles;
pub mod runner;
pub mod schedule;
pub mod ui;
pub mod view_models;

pub use app::InterviewApp;
pub use error::{Error, NavError};
