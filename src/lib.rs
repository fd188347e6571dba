//! Depscan - dependency usage locator for JavaScript and TypeScript projects
//!
//! Depscan is a CLI tool and library that finds which files in a project
//! import a given package, and on which lines. It understands plain and
//! module ECMAScript, TypeScript, JSX/TSX, and the component formats that
//! embed a script region inside markup (Vue SFCs, Svelte, Astro).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core import-detection engine
//! - `mcp`: Model Context Protocol server implementation
//! - `project`: package.json inspection

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod project;
