use core::fmt;

use crate::Reflect;
use crate::ops::{List, ReflectRef, Set, Struct};

/// A function used to implement [`Reflect::reflect_partial_eq`] for structs.
///
/// # Rules
///
/// 1. If `other` is not a struct, return `Some(false)`.
/// 2. If the field counts differ, return `Some(false)`.
/// 3. Compare fields by name; a missing field or a field comparison that
///    is not `Some(true)` ends the comparison with that result.
#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.field_len() != y.field_len() {
        return Some(false);
    }

    for (idx, y_field) in y.iter_fields().enumerate() {
        let Some(x_field) = y.name_at(idx).and_then(|name| x.field(name)) else {
            return Some(false);
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function used to implement [`Reflect::reflect_debug`] for structs.
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        if let Some(name) = dyn_struct.name_at(index) {
            debug.field(name, &field as &dyn fmt::Debug);
        }
    }
    debug.finish()
}

/// A function used to implement [`Reflect::reflect_partial_eq`] for lists
/// and arrays.
///
/// `other` must be a list or an array with the same length, and every
/// item pair must compare `Some(true)`.
#[inline(never)]
pub fn list_partial_eq(x: &dyn List, y: &dyn Reflect) -> Option<bool> {
    let Some(y) = y.reflect_ref().as_list() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (x_value, y_value) in x.iter().zip(y.iter()) {
        let result = x_value.reflect_partial_eq(y_value);
        if result != Some(true) {
            return result;
        }
    }

    Some(true)
}

/// A function used to implement [`Reflect::reflect_debug`] for lists and
/// arrays.
#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function used to implement [`Reflect::reflect_partial_eq`] for sets.
#[inline(never)]
pub fn set_partial_eq(x: &dyn Set, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Set(y) = y.reflect_ref() else {
        return Some(false);
    };
    if x.len() != y.len() {
        return Some(false);
    }

    for val in x.iter() {
        let Some(y_val) = y.get(val) else {
            return Some(false);
        };
        let result = val.reflect_partial_eq(y_val);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function used to implement [`Reflect::reflect_debug`] for sets.
#[inline(never)]
pub fn set_debug(dyn_set: &dyn Set, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_set();
    for value in dyn_set.iter() {
        debug.entry(&value as &dyn fmt::Debug);
    }
    debug.finish()
}
