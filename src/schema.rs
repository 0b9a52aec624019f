//! JSON schema of the vial tag shape, for tools reading exported vials.

use crate::attachment::VialList;
use crate::vial::Vial;
use schemars::Schema;

/// Schema of a single [`Vial`].
pub fn vial_schema() -> Schema {
    schemars::schema_for!(Vial)
}

/// Schema of the vials attached to one target.
pub fn vial_list_schema() -> Schema {
    schemars::schema_for!(VialList)
}
