// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod ai;
pub mod api;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod export;
pub mod models;
pub mod report;
pub mod snapshot;
pub mod store;
pub mod utils;
pub mod validate;
