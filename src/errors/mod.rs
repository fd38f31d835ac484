// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod finder;

pub use finder::{ErrorKind, FinderError, FinderResult};
