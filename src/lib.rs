//! Loan Eligibility API Library
//!
//! This library provides the prediction adapter of the loan simulator: it
//! forwards applicant data to an external scoring backend and falls back to a
//! rule-based verdict whenever that backend cannot answer.
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Core business logic.
//! - `integrations`: External service integrations.
//! - `app`: Router assembly.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `form`: Simulation form inputs and the derived ratio.
//! - `handlers`: HTTP request handlers.
//! - `models`: Core data models.
//! - `prediction`: Adapter orchestration (live call, then fallback).
//! - `render`: Display model for verdicts.
//! - `risk`: Rule-based risk banding.
//! - `scoring_client`: Scoring backend client.
//! - `transform`: Submission parsing and coercion.

pub mod api;
pub mod core;
pub mod integrations;

pub mod app;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod prediction;
pub mod render;
pub mod risk;
pub mod scoring_client;
pub mod transform;
