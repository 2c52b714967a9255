//! A small front end for configuring Topaz engine builds.
//!
//! It picks a build configuration, a render API and a CMake generator,
//! works out the build directory for that combination and runs the CMake
//! configure step for it.
//!
//! # Installation
//! ```sh
//! cargo install topaz_build
//! ```
//!
//! # Examples
//! Configure a debug Vulkan build with Makefiles, ending up in `build/vulkan_debug`
//! ```sh
//! topaz_build debug vulkan "Unix Makefiles"
//! ```
//! Only print the CMake command
//! ```sh
//! topaz_build --dry-run release opengl Ninja
//! ```
//! Simple form, debug build with no render API picked
//! ```sh
//! topaz_build --simple Unix Makefiles
//! ```
//!
//! # Settings
//! Optional, read from `--config`, `./topaz_build.toml` or the per-user
//! config directory, in that order. Every key is optional.
//! ```toml
//! cmake = "cmake"
//! build_root = "build"
//! source_dir = "."
//! config_define = "TOPAZ_BUILDCONFIG"
//! render_api_define = "TOPAZ_RENDERAPI"
//! ```

/// Contains code that handles the binary's modes
pub mod bin_flags;
/// Contains the CMake configure command
pub mod builder;
/// Error type shared by the crate
pub mod error;
/// Turns command line tokens into a build specification
pub mod resolver;
/// Contains logger and settings loader
pub mod utils;
