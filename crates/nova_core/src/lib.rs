//! Nova Core
//!
//! Foundational value types shared by the Nova crates:
//!
//! - **Vectors**: [`Vec2`] for screen/NDC space, [`Vec3`] for world space
//! - **Matrices**: column-major [`Mat4`] for model and projection transforms
//! - **Colors**: linear RGBA [`Color`] with hex parsing for configuration
//!
//! # Example
//!
//! ```rust
//! use nova_core::{Color, Vec3};
//!
//! let p = Vec3::new(1.0, 2.0, 3.0) * 2.0;
//! assert_eq!(p, Vec3::new(2.0, 4.0, 6.0));
//!
//! let gold = Color::from_hex_str("#ffd700").unwrap();
//! assert_eq!(gold, Color::from_hex(0xffd700));
//! ```

pub mod color;
pub mod math;

pub use color::Color;
pub use math::{Mat4, Vec2, Vec3};
