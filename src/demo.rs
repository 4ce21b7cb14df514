//! Seed data for demos, tests, and the benchmark: five NYC-area volunteers
//! and eight candidate events.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{AvailabilityWindow, Event, GeoPoint, User};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid demo timestamp")
}

fn window(day_of_week: u8, start_time: &str, end_time: &str) -> AvailabilityWindow {
    AvailabilityWindow {
        day_of_week,
        start_time: start_time.into(),
        end_time: end_time.into(),
    }
}

/// Five volunteers with distinct skill sets, schedules, and causes.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "user1".into(),
            name: "Alice Johnson".into(),
            skills: vec![
                "Teaching".into(),
                "Mentoring".into(),
                "Public Speaking".into(),
                "Childcare".into(),
            ],
            availability: vec![
                window(0, "09:00", "17:00"),
                window(1, "18:00", "21:00"),
                window(5, "10:00", "16:00"),
            ],
            location: GeoPoint {
                latitude: 40.7128,
                longitude: -74.0060,
            },
            cause_preferences: vec![
                "Education".into(),
                "Children".into(),
                "Youth Development".into(),
            ],
        },
        User {
            id: "user2".into(),
            name: "Bob Smith".into(),
            skills: vec![
                "Cooking".into(),
                "Food Service".into(),
                "Event Planning".into(),
            ],
            availability: vec![
                window(2, "10:00", "15:00"),
                window(4, "10:00", "15:00"),
                window(6, "08:00", "12:00"),
            ],
            location: GeoPoint {
                latitude: 40.7580,
                longitude: -73.9855,
            },
            cause_preferences: vec![
                "Hunger Relief".into(),
                "Food Security".into(),
                "Community".into(),
            ],
        },
        User {
            id: "user3".into(),
            name: "Carol Williams".into(),
            skills: vec![
                "Medical".into(),
                "First Aid".into(),
                "Nursing".into(),
                "Health Education".into(),
            ],
            availability: vec![
                window(1, "09:00", "17:00"),
                window(3, "09:00", "17:00"),
                window(5, "10:00", "14:00"),
            ],
            location: GeoPoint {
                latitude: 40.7505,
                longitude: -73.9934,
            },
            cause_preferences: vec![
                "Healthcare".into(),
                "Public Health".into(),
                "Elderly Care".into(),
            ],
        },
        User {
            id: "user4".into(),
            name: "David Brown".into(),
            skills: vec![
                "Construction".into(),
                "Carpentry".into(),
                "Painting".into(),
                "General Maintenance".into(),
            ],
            availability: vec![window(0, "08:00", "16:00"), window(6, "08:00", "16:00")],
            location: GeoPoint {
                latitude: 40.6782,
                longitude: -73.9442,
            },
            cause_preferences: vec![
                "Housing".into(),
                "Community Development".into(),
                "Infrastructure".into(),
            ],
        },
        User {
            id: "user5".into(),
            name: "Emma Davis".into(),
            skills: vec![
                "Marketing".into(),
                "Social Media".into(),
                "Graphic Design".into(),
                "Writing".into(),
            ],
            availability: vec![
                window(1, "19:00", "22:00"),
                window(3, "19:00", "22:00"),
                window(5, "13:00", "18:00"),
            ],
            location: GeoPoint {
                latitude: 40.7282,
                longitude: -73.9942,
            },
            cause_preferences: vec![
                "Arts".into(),
                "Environment".into(),
                "Animal Welfare".into(),
            ],
        },
    ]
}

/// Eight candidate events across the demo causes and neighborhoods.
pub fn demo_events() -> Vec<Event> {
    vec![
        Event {
            id: "event1".into(),
            title: "After-School Tutoring Program".into(),
            description: "Help elementary students with homework and reading".into(),
            required_skills: vec!["Teaching".into(), "Mentoring".into(), "Patience".into()],
            event_date: at(2024, 2, 4, 14, 0),
            duration_hours: 3.0,
            location: GeoPoint {
                latitude: 40.7140,
                longitude: -74.0060,
            },
            cause: "Education".into(),
            organization_id: "org1".into(),
            organization_name: "Youth Education Foundation".into(),
        },
        Event {
            id: "event2".into(),
            title: "Community Soup Kitchen".into(),
            description: "Prepare and serve meals to those in need".into(),
            required_skills: vec!["Cooking".into(), "Food Service".into()],
            event_date: at(2024, 2, 7, 11, 0),
            duration_hours: 4.0,
            location: GeoPoint {
                latitude: 40.7600,
                longitude: -73.9850,
            },
            cause: "Hunger Relief".into(),
            organization_id: "org2".into(),
            organization_name: "City Food Bank".into(),
        },
        Event {
            id: "event3".into(),
            title: "Health Screening Clinic".into(),
            description: "Provide basic health screenings to community members".into(),
            required_skills: vec![
                "Medical".into(),
                "First Aid".into(),
                "Health Education".into(),
            ],
            event_date: at(2024, 2, 5, 10, 0),
            duration_hours: 6.0,
            location: GeoPoint {
                latitude: 40.7510,
                longitude: -73.9930,
            },
            cause: "Healthcare".into(),
            organization_id: "org3".into(),
            organization_name: "Community Health Alliance".into(),
        },
        Event {
            id: "event4".into(),
            title: "Habitat Restoration Project".into(),
            description: "Help build and repair homes for families in need".into(),
            required_skills: vec!["Construction".into(), "Carpentry".into()],
            event_date: at(2024, 2, 3, 9, 0),
            duration_hours: 6.0,
            location: GeoPoint {
                latitude: 40.6800,
                longitude: -73.9450,
            },
            cause: "Housing".into(),
            organization_id: "org4".into(),
            organization_name: "Habitat for Humanity".into(),
        },
        Event {
            id: "event5".into(),
            title: "Environmental Cleanup Day".into(),
            description: "Clean up local parks and waterways".into(),
            required_skills: vec!["Physical Labor".into(), "Teamwork".into()],
            event_date: at(2024, 2, 10, 10, 0),
            duration_hours: 4.0,
            location: GeoPoint {
                latitude: 40.7300,
                longitude: -73.9950,
            },
            cause: "Environment".into(),
            organization_id: "org5".into(),
            organization_name: "Green Earth Initiative".into(),
        },
        Event {
            id: "event6".into(),
            title: "Senior Center Social Event".into(),
            description: "Organize activities and provide companionship to seniors".into(),
            required_skills: vec![
                "Communication".into(),
                "Patience".into(),
                "Event Planning".into(),
            ],
            event_date: at(2024, 2, 6, 14, 0),
            duration_hours: 3.0,
            location: GeoPoint {
                latitude: 40.7550,
                longitude: -73.9920,
            },
            cause: "Elderly Care".into(),
            organization_id: "org6".into(),
            organization_name: "Senior Support Network".into(),
        },
        Event {
            id: "event7".into(),
            title: "Animal Shelter Volunteer Day".into(),
            description: "Help care for animals and assist with adoption events".into(),
            required_skills: vec!["Animal Care".into(), "Compassion".into()],
            event_date: at(2024, 2, 10, 13, 0),
            duration_hours: 5.0,
            location: GeoPoint {
                latitude: 40.7200,
                longitude: -73.9900,
            },
            cause: "Animal Welfare".into(),
            organization_id: "org7".into(),
            organization_name: "City Animal Rescue".into(),
        },
        Event {
            id: "event8".into(),
            title: "Digital Marketing Workshop".into(),
            description: "Teach nonprofits how to use social media effectively".into(),
            required_skills: vec![
                "Marketing".into(),
                "Social Media".into(),
                "Teaching".into(),
            ],
            event_date: at(2024, 2, 5, 19, 0),
            duration_hours: 2.0,
            location: GeoPoint {
                latitude: 40.7280,
                longitude: -73.9940,
            },
            cause: "Education".into(),
            organization_id: "org8".into(),
            organization_name: "Tech for Good".into(),
        },
    ]
}
