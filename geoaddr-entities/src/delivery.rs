use crate::{address::Address, user::UserId};

/// An address record owned by a user.
///
/// Deletion is logical: `deleted` is flipped to `true` and never back,
/// the record itself stays in storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub address: Address,
    pub user_id: UserId,
    pub deleted: bool,
}
