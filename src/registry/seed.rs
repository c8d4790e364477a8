use std::collections::HashMap;

use crate::models::Activity;

// The fixed activity table the registry is rebuilt from on every process
// start. Names are the map keys and double as the API path segment.
pub fn seed_activities() -> HashMap<String, Activity> {
    let entries = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            vec!["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            vec!["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            vec!["john@mergington.edu", "olivia@mergington.edu"],
        ),
        (
            "Basketball Team",
            "Competitive basketball team for school championships",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            vec!["alex@mergington.edu"],
        ),
        (
            "Tennis Club",
            "Learn tennis skills and play friendly matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
            10,
            vec!["isabella@mergington.edu"],
        ),
        (
            "Art Studio",
            "Explore painting, drawing, and sculpture techniques",
            "Wednesdays, 3:30 PM - 5:00 PM",
            16,
            vec!["grace@mergington.edu", "noah@mergington.edu"],
        ),
        (
            "Drama Club",
            "Perform in school plays and develop acting skills",
            "Thursdays, 4:00 PM - 5:30 PM",
            20,
            vec!["lucas@mergington.edu"],
        ),
        (
            "Debate Team",
            "Compete in debate competitions and develop critical thinking",
            "Mondays and Fridays, 3:30 PM - 4:30 PM",
            14,
            vec!["ava@mergington.edu", "mason@mergington.edu"],
        ),
        (
            "Science Club",
            "Conduct experiments and explore advanced scientific concepts",
            "Tuesdays, 3:30 PM - 5:00 PM",
            18,
            vec!["ethan@mergington.edu"],
        ),
    ];

    entries
        .into_iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants,
                    participants: participants.into_iter().map(str::to_string).collect(),
                },
            )
        })
        .collect()
}
