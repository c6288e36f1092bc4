//! Core library for the catalog-sync command line application.
//!
//! The library talks to a spreadsheet-backed catalog endpoint. The HTTP
//! client and response envelope live under [`catalog::io`], the row table and
//! product types inside [`catalog::model`], image link rewriting in
//! [`catalog::image`], HTML output in [`catalog::render`], and the list and
//! submit orchestration under [`catalog::sync`].

pub mod catalog;

pub use catalog::{
    CatalogError, Result, config, error, hooks, image, io, logging, model, render, sync,
};
