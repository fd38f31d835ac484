// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod finder;
pub mod library;

pub use finder::LocalFinder;
pub use library::{platform_dir, NativeLibrary};
