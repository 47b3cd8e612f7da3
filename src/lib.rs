//! Quiver - a terminal-based 2D/3D point and vector visualizer.
//!
//! Quiver lets a student type points, vectors and an optional equation in
//! a small notation and see them plotted on an interactive braille canvas
//! with vim-style keyboard navigation.
//!
//! # Features
//!
//! - Point notation `(1,2)` / `(1,2,3)` and vector notation `<3,4>` /
//!   `<1,1>@(2,2)` with inline error messages
//! - Curve (`y = f(x)`) and surface (`z = f(x, y)`) overlays
//! - Pan, zoom and 3D camera rotation
//! - Gruvbox color themes
//! - PNG snapshot export and clipboard integration
//!
//! # Example
//!
//! ```
//! use quiver::scene::{PlotMode, Scene};
//!
//! let scene = Scene::from_inputs(
//!     PlotMode::TwoD,
//!     "(1,2); (0,0)",
//!     "<3,4>",
//!     "x^2",
//!     "-5",
//!     "5",
//! )
//! .unwrap();
//! assert_eq!(scene.vectors[0].magnitude(), 5.0);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod editor;
pub mod error;
pub mod export;
pub mod expr;
pub mod scene;
pub mod ui;
pub mod util;
pub mod view;

pub use error::{QuiverError, Result};
