//! Property-based tests for synchronization and deep copy.

mod common;

use common::{Audit, Course, MemberForm, MemberRow};
use proptest::prelude::*;
use recordkit_model::{deep_clone, synchronize};
use std::collections::HashMap;

fn audit_strategy() -> impl Strategy<Value = Audit> {
    ("[a-z]{0,12}", any::<i64>()).prop_map(|(created_by, created_at)| Audit {
        created_by,
        created_at,
    })
}

fn form_strategy() -> impl Strategy<Value = MemberForm> {
    (
        "[a-zA-Z ]{0,20}",
        proptest::option::of(0u32..150),
        "[0-9]{0,11}",
        any::<i32>(),
        ".{0,10}",
        audit_strategy(),
    )
        .prop_map(|(name, age, phone, level, remark, audit)| MemberForm {
            name,
            age,
            phone,
            level,
            remark,
            audit,
        })
}

fn course_strategy() -> impl Strategy<Value = Course> {
    (
        ".{0,20}",
        proptest::option::of("[a-z]{1,8}"),
        prop::collection::vec("[a-z]{0,6}", 0..5),
        prop::collection::hash_map("[a-z]{1,4}", any::<u32>(), 0..5),
        any::<f64>(),
        audit_strategy(),
    )
        .prop_map(|(title, coach, tags, seats, fee, audit)| Course {
            title,
            coach,
            tags,
            seats,
            fee,
            audit,
        })
}

fn same_float(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

proptest! {
    /// Every same-named, same-typed field ends up equal.
    #[test]
    fn shared_fields_match_after_sync(src in form_strategy(), id in any::<i64>()) {
        let mut dst = MemberRow { id, ..MemberRow::default() };
        synchronize(&mut dst, &src);

        prop_assert_eq!(&dst.name, &src.name);
        prop_assert_eq!(&dst.created_by, &src.audit.created_by);
        prop_assert_eq!(dst.created_at, src.audit.created_at);
        prop_assert_eq!(dst.phone.as_ref(), Some(&src.phone));
        prop_assert_eq!(dst.id, id);
        prop_assert_eq!(dst.age, src.age.unwrap_or_default());
    }

    /// Synchronizing twice changes nothing further.
    #[test]
    fn sync_is_idempotent(src in form_strategy()) {
        let mut once = MemberRow::default();
        synchronize(&mut once, &src);
        let mut twice = once.clone();
        synchronize(&mut twice, &src);
        prop_assert_eq!(once, twice);
    }

    /// Deep copies are equal to their source, float fields included.
    #[test]
    fn deep_clone_is_equal(src in course_strategy()) {
        let copy: Course = deep_clone(&src).unwrap();
        prop_assert!(same_float(copy.fee, src.fee), "fee {} became {}", src.fee, copy.fee);
        prop_assert_eq!(Course { fee: 0.0, ..copy }, Course { fee: 0.0, ..src });
    }

    #[test]
    fn deep_clone_of_plain_maps(src in prop::collection::hash_map("[a-z]{1,4}", any::<i64>(), 0..8)) {
        let copy: HashMap<String, i64> = deep_clone(&src).unwrap();
        prop_assert_eq!(copy, src);
    }
}
