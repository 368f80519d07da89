// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use rust_decimal::Decimal;
use sgbr::cache::TtlCache;
use sgbr::utils::{fmt_brl, parse_date, parse_datetime, parse_decimal};

#[test]
fn brl_formatting_groups_thousands_with_dots() {
    assert_eq!(fmt_brl(&Decimal::from(2500)), "R$ 2.500,00");
    assert_eq!(fmt_brl(&Decimal::from(99)), "R$ 99,00");
    assert_eq!(fmt_brl(&Decimal::new(123456750, 2)), "R$ 1.234.567,50");
    assert_eq!(fmt_brl(&Decimal::ZERO), "R$ 0,00");
}

#[test]
fn brl_formatting_keeps_the_sign_outside_the_symbol() {
    assert_eq!(fmt_brl(&Decimal::from(-99)), "-R$ 99,00");
    assert_eq!(fmt_brl(&Decimal::new(-1050, 2)), "-R$ 10,50");
}

#[test]
fn brl_formatting_rounds_to_cents() {
    assert_eq!(fmt_brl(&Decimal::new(12345, 3)), "R$ 12,35"); // 12.345
    assert_eq!(fmt_brl(&Decimal::new(9999, 1)), "R$ 999,90");
}

#[test]
fn datetime_parsing_accepts_minute_precision_or_bare_dates() {
    let dt = parse_datetime("2024-07-01 14:45").unwrap();
    assert_eq!(dt.to_string(), "2024-07-01 14:45:00");
    let dt = parse_datetime("2024-07-01").unwrap();
    assert_eq!(dt.to_string(), "2024-07-01 00:00:00");
    assert!(parse_datetime("01/07/2024").is_err());
}

#[test]
fn date_and_decimal_parsing_reject_garbage() {
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_decimal("abc").is_err());
    assert_eq!(parse_decimal("75.50").unwrap(), Decimal::new(7550, 2));
}

#[test]
fn cache_serves_repeat_reads_without_refetching() {
    let mut cache: TtlCache<Vec<i32>> = TtlCache::new(Duration::from_secs(60));
    let mut calls = 0;
    for _ in 0..3 {
        let got = cache
            .get_or_fetch(|| -> Result<_, ()> {
                calls += 1;
                Ok(vec![1, 2, 3])
            })
            .unwrap();
        assert_eq!(got, vec![1, 2, 3]);
    }
    assert_eq!(calls, 1);
}

#[test]
fn cache_refetches_once_the_slot_is_stale() {
    let mut cache: TtlCache<i32> = TtlCache::new(Duration::ZERO);
    let mut calls = 0;
    for _ in 0..2 {
        cache
            .get_or_fetch(|| -> Result<_, ()> {
                calls += 1;
                Ok(calls)
            })
            .unwrap();
    }
    assert_eq!(calls, 2);
}

#[test]
fn invalidate_forces_the_next_read_to_fetch() {
    let mut cache: TtlCache<i32> = TtlCache::new(Duration::from_secs(60));
    let mut calls = 0;
    let mut read = |cache: &mut TtlCache<i32>, calls: &mut i32| {
        cache
            .get_or_fetch(|| -> Result<_, ()> {
                *calls += 1;
                Ok(*calls)
            })
            .unwrap()
    };
    assert_eq!(read(&mut cache, &mut calls), 1);
    assert_eq!(read(&mut cache, &mut calls), 1);
    cache.invalidate();
    assert_eq!(read(&mut cache, &mut calls), 2);
}

#[test]
fn failed_refresh_surfaces_the_error() {
    let mut cache: TtlCache<i32> = TtlCache::new(Duration::from_secs(60));
    let err = cache.get_or_fetch(|| Err::<i32, &str>("down")).unwrap_err();
    assert_eq!(err, "down");
    // A later successful fetch fills the slot normally.
    assert_eq!(cache.get_or_fetch(|| Ok::<_, &str>(7)).unwrap(), 7);
}
