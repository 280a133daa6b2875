//! Trip record types handed to the engine by the CRUD layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tripsplit_shared::types::{Currency, ExpenseId, Money, TripId, UserId};

/// A user account, as owned by the authentication subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Unique display handle.
    pub nickname: String,
    /// Unique login identifier.
    pub email: String,
    /// Whether the user is an administrator.
    #[serde(default)]
    pub is_admin: bool,
}

/// A user's membership in a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// The member.
    pub user: User,
    /// When the user joined. Informational only; never used for ordering.
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

impl Membership {
    /// Creates a membership without a join timestamp.
    #[must_use]
    pub fn new(user: User) -> Self {
        Self {
            user,
            joined_at: None,
        }
    }
}

/// A trip record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Trip ID.
    pub id: TripId,
    /// Trip name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Planned budget. `None` or zero means no budget tracking.
    #[serde(default)]
    pub budget: Option<Money>,
    /// Currency the budget and every expense are denominated in.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// The trip owner.
    pub organizer: User,
    /// Member rows in data-source order.
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

/// Role a participant holds in a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    /// The single trip owner.
    Organizer,
    /// Any other participant.
    Member,
}

/// A resolved trip participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Role in the trip.
    pub role: ParticipantRole,
    /// The participant's account.
    pub user: User,
}

impl Participant {
    /// Returns true if this participant organizes the trip.
    #[must_use]
    pub fn is_organizer(&self) -> bool {
        self.role == ParticipantRole::Organizer
    }
}

impl Trip {
    /// Returns the ordered, deduplicated participant roster.
    ///
    /// The organizer always comes first. Memberships follow in source order,
    /// skipping the organizer and any user already listed.
    #[must_use]
    pub fn roster(&self) -> Vec<Participant> {
        let mut roster = Vec::with_capacity(self.memberships.len() + 1);
        roster.push(Participant {
            role: ParticipantRole::Organizer,
            user: self.organizer.clone(),
        });

        for membership in &self.memberships {
            if roster.iter().any(|p| p.user.id == membership.user.id) {
                continue;
            }
            roster.push(Participant {
                role: ParticipantRole::Member,
                user: membership.user.clone(),
            });
        }

        roster
    }

    /// Returns true if the user organizes or is a member of this trip.
    #[must_use]
    pub fn is_participant(&self, user_id: UserId) -> bool {
        self.organizer.id == user_id || self.memberships.iter().any(|m| m.user.id == user_id)
    }
}

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// What was paid for.
    pub title: String,
    /// Amount paid, in the trip currency.
    pub amount: Money,
    /// Who paid.
    pub payer: User,
}

/// An already-fetched, already-authorized view of one trip and its expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    /// The trip with its organizer and memberships.
    pub trip: Trip,
    /// Every expense currently recorded for the trip.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{trip_with, user};

    #[test]
    fn test_roster_puts_organizer_first() {
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        let trip = trip_with(&alice, &[&bob, &carol]);

        let roster = trip.roster();
        let names: Vec<&str> = roster.iter().map(|p| p.user.nickname.as_str()).collect();

        assert_eq!(names, ["alice", "bob", "carol"]);
        assert!(roster[0].is_organizer());
        assert!(!roster[1].is_organizer());
    }

    #[test]
    fn test_roster_keeps_source_order_of_memberships() {
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        let trip = trip_with(&alice, &[&carol, &bob]);

        let names: Vec<String> = trip.roster().into_iter().map(|p| p.user.nickname).collect();
        assert_eq!(names, ["alice", "carol", "bob"]);
    }

    #[test]
    fn test_roster_never_duplicates_organizer() {
        let alice = user("alice");
        let bob = user("bob");
        let trip = trip_with(&alice, &[&alice, &bob, &bob]);

        let roster = trip.roster();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].role, ParticipantRole::Organizer);
        assert_eq!(roster[1].user.id, bob.id);
    }

    #[test]
    fn test_is_participant() {
        let alice = user("alice");
        let bob = user("bob");
        let stranger = user("mallory");
        let trip = trip_with(&alice, &[&bob]);

        assert!(trip.is_participant(alice.id));
        assert!(trip.is_participant(bob.id));
        assert!(!trip.is_participant(stranger.id));
    }

    #[test]
    fn test_trip_record_deserializes_with_defaults() {
        let json = r#"{
            "trip": {
                "id": "0190c5a0-0000-7000-8000-000000000001",
                "name": "Tatry",
                "organizer": {
                    "id": "0190c5a0-0000-7000-8000-000000000002",
                    "nickname": "alice",
                    "email": "alice@example.com"
                }
            }
        }"#;

        let record: TripRecord = serde_json::from_str(json).unwrap();
        assert!(record.expenses.is_empty());
        assert!(record.trip.memberships.is_empty());
        assert_eq!(record.trip.budget, None);
        assert!(!record.trip.organizer.is_admin);
    }
}
