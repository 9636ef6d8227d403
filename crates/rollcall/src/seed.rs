//! The activities every directory starts with.

use crate::data::{Activities, Activity};

/// Builds the Mergington High School activity list, in display order.
pub fn activities() -> Activities {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and compete in interscholastic basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Develop tennis skills and play friendly matches",
                "Wednesdays, 3:30 PM - 5:00 PM",
                10,
            )
            .with_participants(["ava@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["mia@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and perform in school plays and productions",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(["isabella@mergington.edu", "lucas@mergington.edu"]),
        ),
        (
            "Science Club",
            Activity::new(
                "Run hands-on experiments and prepare for science fairs",
                "Wednesdays, 4:00 PM - 5:00 PM",
                16,
            )
            .with_participants(["ethan@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build public speaking skills and compete in debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
