// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::{Duration, Instant};

/// A single-value cache with an explicit stale time, owned and passed
/// around by the caller rather than living in module state. Remote fetches
/// go through this so a command hitting the same endpoint twice only pays
/// for one request.
#[derive(Debug)]
pub struct TtlCache<T> {
    stale_after: Duration,
    slot: Option<(Instant, T)>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(stale_after: Duration) -> Self {
        TtlCache {
            stale_after,
            slot: None,
        }
    }

    /// Return the cached value, refreshing through `fetch` when the slot is
    /// empty or older than the stale time. A failed refresh leaves any
    /// previous (stale) value in place.
    pub fn get_or_fetch<E>(&mut self, fetch: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        if let Some((at, ref value)) = self.slot {
            if at.elapsed() < self.stale_after {
                return Ok(value.clone());
            }
        }
        let value = fetch()?;
        self.slot = Some((Instant::now(), value.clone()));
        Ok(value)
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
