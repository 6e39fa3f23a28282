//! Webinar registration: parse the form, render the notification email and
//! hand it to the configured `EmailSender`.

pub mod model;
pub mod rest;
pub mod service;
pub mod template;

mod tests;
