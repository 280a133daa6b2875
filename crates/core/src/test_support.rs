//! Record builders shared by unit and property tests.

use tripsplit_shared::types::{ExpenseId, Money, TripId, UserId};

use crate::trip::{Expense, Membership, Trip, User};

pub(crate) fn user(nickname: &str) -> User {
    User {
        id: UserId::new(),
        nickname: nickname.to_string(),
        email: format!("{nickname}@example.com"),
        is_admin: false,
    }
}

pub(crate) fn trip_with(organizer: &User, members: &[&User]) -> Trip {
    Trip {
        id: TripId::new(),
        name: "Test Trip".to_string(),
        description: None,
        budget: None,
        currency: None,
        organizer: organizer.clone(),
        memberships: members
            .iter()
            .map(|u| Membership::new((*u).clone()))
            .collect(),
    }
}

pub(crate) fn expense(payer: &User, cents: i64) -> Expense {
    Expense {
        id: ExpenseId::new(),
        title: format!("Paid by {}", payer.nickname),
        amount: Money::from_minor_units(cents),
        payer: payer.clone(),
    }
}

/// Builds `count` distinct users named `p0`, `p1`, ...
pub(crate) fn users(count: usize) -> Vec<User> {
    (0..count).map(|i| user(&format!("p{i}"))).collect()
}
