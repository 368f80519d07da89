// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod collaborators;
pub mod dashboard;
pub mod reports;
pub mod skills;
pub mod transactions;
pub mod vault;
