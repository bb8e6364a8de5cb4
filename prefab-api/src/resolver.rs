//! Characteristic lookup by type.
//!
//! Type-based updates address a characteristic by its HomeKit type UUID; the
//! server's update endpoint wants the opaque id pair instead. This module
//! does the translation: walk the accessory's service/characteristic tree in
//! the order the server returned it and commit to the first exact match.

use crate::model::{Characteristic, Service};

/// Find the first characteristic of the given type.
///
/// Services are walked in returned order, characteristics within each service
/// in returned order, and the search stops at the first characteristic whose
/// `type` equals `characteristic_type` exactly (case sensitive). Duplicates
/// later in the tree are never considered.
pub(crate) fn find_characteristic<'a>(
    services: &'a [Service],
    characteristic_type: &str,
) -> Option<(&'a Service, &'a Characteristic)> {
    for service in services {
        for characteristic in &service.characteristics {
            if characteristic.characteristic_type == characteristic_type {
                return Some((service, characteristic));
            }
        }
    }
    None
}
