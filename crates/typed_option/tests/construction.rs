use std::ptr;

use typed_option::{O, none, some};

#[test]
fn constructors_agree() {
    assert_eq!(O::some(5), some(5));
    assert_eq!(O::Some(5), some(5));
    assert_eq!(O::<i32>::none(), none());
    assert_eq!(O::<i32>::default(), O::None);
}

#[test]
fn none_orders_before_some() {
    assert!(none::<i32>() < some(0));
    assert!(none::<i32>() < some(i32::MIN));
    assert!(some(1) < some(2));

    let mut values = vec![some(3), none(), some(1)];
    values.sort();
    assert_eq!(values, vec![none(), some(1), some(3)]);
}

#[test]
fn from_nullable_maps_sentinel_to_none() {
    assert_eq!(O::from_nullable(None::<i32>), none());
    assert_eq!(O::from_nullable(Some(5)), some(5));
}

#[test]
fn from_nullable_keeps_falsy_values() {
    assert_eq!(O::from_nullable(Some(0)), some(0));
    assert_eq!(O::from_nullable(Some("")), some(""));
    assert_eq!(O::from_nullable(Some(false)), some(false));
}

#[test]
fn from_nullable_on_pointers() {
    let null: *const u32 = ptr::null();
    assert!(O::from_nullable(null).is_none());

    let mut value = 7u32;
    let raw: *mut u32 = &mut value;
    assert_eq!(O::from_nullable(raw), some(raw));
}

#[test]
fn from_nullable_is_identity_on_o() {
    assert_eq!(O::from_nullable(some(1)), some(1));
    assert_eq!(O::from_nullable(none::<i32>()), none());
}

#[test]
fn some_signals_presence_even_for_nullable_payload() {
    let wrapped: O<Option<u8>> = some(None);
    assert!(wrapped.is_some());

    let null_ptr: O<*const u8> = some(ptr::null());
    assert!(null_ptr.is_some());
}

#[test]
fn converts_to_and_from_std_option() {
    let from_std: O<&str> = Some("x").into();
    assert_eq!(from_std, some("x"));

    let back: Option<&str> = from_std.into();
    assert_eq!(back, Some("x"));
    assert_eq!(none::<u8>().into_option(), None);
}
