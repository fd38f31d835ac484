// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod convert;
pub mod finder;
pub mod stream;

pub use finder::RemoteFinder;
pub use stream::{NameStream, StreamEvent};
