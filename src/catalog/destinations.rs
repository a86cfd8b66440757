//! Built-in destination data for `StaticCatalog`.

use std::collections::HashMap;

use crate::models::activity::{Activity, ActivityLocation};

pub(super) fn builtin_destinations() -> HashMap<String, Vec<Activity>> {
    HashMap::from([
        ("tokyo".to_string(), tokyo()),
        ("paris".to_string(), paris()),
        ("denver".to_string(), denver()),
        ("bali".to_string(), bali()),
    ])
}

/// Destination-independent list returned on a catalog miss.
pub(super) fn default_catalog() -> Vec<Activity> {
    vec![
        Activity {
            id: "old-town-walking-tour".to_string(),
            name: "Old Town Walking Tour".to_string(),
            description: "Get your bearings with a guided loop through the historic center."
                .to_string(),
            category: "sightseeing".to_string(),
            duration_hours: 2.5,
            cost: 0.0,
            location: ActivityLocation {
                address: "City center".to_string(),
                coordinates: (0.0, 0.0),
            },
            rating: 4.3,
            tags: vec![
                "walking".to_string(),
                "history".to_string(),
                "orientation".to_string(),
            ],
        },
        Activity {
            id: "city-museum".to_string(),
            name: "City Museum Visit".to_string(),
            description: "The permanent collection plus one rotating exhibition hall.".to_string(),
            category: "museums".to_string(),
            duration_hours: 3.0,
            cost: 18.0,
            location: ActivityLocation {
                address: "Museum quarter".to_string(),
                coordinates: (0.0, 0.0),
            },
            rating: 4.2,
            tags: vec!["art".to_string(), "history".to_string(), "indoor".to_string()],
        },
        Activity {
            id: "local-market-tasting".to_string(),
            name: "Local Market Tasting".to_string(),
            description: "Sample regional produce and street food at the central market."
                .to_string(),
            category: "food & drink".to_string(),
            duration_hours: 2.0,
            cost: 25.0,
            location: ActivityLocation {
                address: "Central market hall".to_string(),
                coordinates: (0.0, 0.0),
            },
            rating: 4.5,
            tags: vec!["food".to_string(), "market".to_string(), "local".to_string()],
        },
        Activity {
            id: "panorama-viewpoint".to_string(),
            name: "Panorama Viewpoint Visit".to_string(),
            description: "The classic photo stop over the rooftops, best before sunset."
                .to_string(),
            category: "sightseeing".to_string(),
            duration_hours: 1.5,
            cost: 12.0,
            location: ActivityLocation {
                address: "Upper town".to_string(),
                coordinates: (0.0, 0.0),
            },
            rating: 4.4,
            tags: vec!["views".to_string(), "photography".to_string()],
        },
        Activity {
            id: "riverside-bike-loop".to_string(),
            name: "Riverside Bike Loop".to_string(),
            description: "An easy ride along the water with rental bike included.".to_string(),
            category: "outdoor".to_string(),
            duration_hours: 2.0,
            cost: 15.0,
            location: ActivityLocation {
                address: "River promenade".to_string(),
                coordinates: (0.0, 0.0),
            },
            rating: 4.1,
            tags: vec!["cycling".to_string(), "nature".to_string(), "active".to_string()],
        },
    ]
}

fn tokyo() -> Vec<Activity> {
    vec![
        Activity {
            id: "senso-ji-temple".to_string(),
            name: "Senso-ji Temple & Nakamise Street".to_string(),
            description: "Tokyo's oldest temple and the snack stalls lining its approach."
                .to_string(),
            category: "sightseeing".to_string(),
            duration_hours: 2.0,
            cost: 0.0,
            location: ActivityLocation {
                address: "2 Chome-3-1 Asakusa, Taito City, Tokyo".to_string(),
                coordinates: (35.7148, 139.7967),
            },
            rating: 4.7,
            tags: vec!["temple".to_string(), "history".to_string(), "walking".to_string()],
        },
        Activity {
            id: "tsukiji-market-walk".to_string(),
            name: "Tsukiji Outer Market Food Walk".to_string(),
            description: "Graze through the stalls of the outer market with a local guide."
                .to_string(),
            category: "food & drink".to_string(),
            duration_hours: 3.0,
            cost: 45.0,
            location: ActivityLocation {
                address: "4 Chome Tsukiji, Chuo City, Tokyo".to_string(),
                coordinates: (35.6654, 139.7707),
            },
            rating: 4.8,
            tags: vec!["food".to_string(), "market".to_string(), "local".to_string()],
        },
        Activity {
            id: "meiji-shrine".to_string(),
            name: "Meiji Shrine & Yoyogi Park".to_string(),
            description: "Forested shrine grounds a short walk from Harajuku.".to_string(),
            category: "sightseeing".to_string(),
            duration_hours: 2.5,
            cost: 0.0,
            location: ActivityLocation {
                address: "1-1 Yoyogikamizonocho, Shibuya City, Tokyo".to_string(),
                coordinates: (35.6764, 139.6993),
            },
            rating: 4.6,
            tags: vec!["shrine".to_string(), "park".to_string(), "nature".to_string()],
        },
        Activity {
            id: "teamlab-planets".to_string(),
            name: "teamLab Planets".to_string(),
            description: "Barefoot, water-and-light immersive art in Toyosu.".to_string(),
            category: "art & museums".to_string(),
            duration_hours: 3.0,
            cost: 32.0,
            location: ActivityLocation {
                address: "6 Chome-1-16 Toyosu, Koto City, Tokyo".to_string(),
                coordinates: (35.6491, 139.7897),
            },
            rating: 4.5,
            tags: vec!["art".to_string(), "immersive".to_string(), "indoor".to_string()],
        },
        Activity {
            id: "sushi-making-class".to_string(),
            name: "Sushi Making Class".to_string(),
            description: "Roll and plate your own nigiri under a chef's eye, lunch included."
                .to_string(),
            category: "food & drink".to_string(),
            duration_hours: 3.5,
            cost: 120.0,
            location: ActivityLocation {
                address: "Ginza, Chuo City, Tokyo".to_string(),
                coordinates: (35.6717, 139.7650),
            },
            rating: 4.9,
            tags: vec!["food".to_string(), "cooking".to_string(), "hands-on".to_string()],
        },
    ]
}

fn paris() -> Vec<Activity> {
    vec![
        Activity {
            id: "louvre-highlights".to_string(),
            name: "Louvre Highlights Tour".to_string(),
            description: "The Mona Lisa, the Winged Victory and the rooms in between."
                .to_string(),
            category: "museums".to_string(),
            duration_hours: 3.0,
            cost: 22.0,
            location: ActivityLocation {
                address: "Rue de Rivoli, 75001 Paris".to_string(),
                coordinates: (48.8606, 2.3376),
            },
            rating: 4.7,
            tags: vec!["art".to_string(), "history".to_string(), "museum".to_string()],
        },
        Activity {
            id: "seine-evening-cruise".to_string(),
            name: "Seine Evening Cruise".to_string(),
            description: "One loop past the lit-up landmarks from the water.".to_string(),
            category: "sightseeing".to_string(),
            duration_hours: 1.5,
            cost: 16.0,
            location: ActivityLocation {
                address: "Port de la Conference, 75008 Paris".to_string(),
                coordinates: (48.8637, 2.3074),
            },
            rating: 4.4,
            tags: vec!["river".to_string(), "views".to_string(), "romantic".to_string()],
        },
        Activity {
            id: "montmartre-walk".to_string(),
            name: "Montmartre & Sacre-Coeur Walk".to_string(),
            description: "Climb through the old artists' quarter to the basilica steps."
                .to_string(),
            category: "sightseeing".to_string(),
            duration_hours: 2.5,
            cost: 0.0,
            location: ActivityLocation {
                address: "Place du Tertre, 75018 Paris".to_string(),
                coordinates: (48.8867, 2.3431),
            },
            rating: 4.6,
            tags: vec!["walking".to_string(), "views".to_string(), "art".to_string()],
        },
        Activity {
            id: "marais-food-tour".to_string(),
            name: "Le Marais Food Tour".to_string(),
            description: "Falafel, fromage and pastry stops across the Marais.".to_string(),
            category: "food & drink".to_string(),
            duration_hours: 3.0,
            cost: 65.0,
            location: ActivityLocation {
                address: "Rue des Rosiers, 75004 Paris".to_string(),
                coordinates: (48.8575, 2.3622),
            },
            rating: 4.8,
            tags: vec!["food".to_string(), "pastry".to_string(), "local".to_string()],
        },
        Activity {
            id: "versailles-half-day".to_string(),
            name: "Palace of Versailles Half-Day".to_string(),
            description: "State apartments, Hall of Mirrors and a stretch of the gardens."
                .to_string(),
            category: "day trips".to_string(),
            duration_hours: 4.5,
            cost: 27.0,
            location: ActivityLocation {
                address: "Place d'Armes, 78000 Versailles".to_string(),
                coordinates: (48.8049, 2.1204),
            },
            rating: 4.5,
            tags: vec!["palace".to_string(), "gardens".to_string(), "history".to_string()],
        },
    ]
}

fn denver() -> Vec<Activity> {
    vec![
        Activity {
            id: "red-rocks-trail-hike".to_string(),
            name: "Red Rocks Trading Post Trail Hike".to_string(),
            description: "A short loop between the sandstone monoliths outside the amphitheatre."
                .to_string(),
            category: "outdoor".to_string(),
            duration_hours: 2.0,
            cost: 0.0,
            location: ActivityLocation {
                address: "18300 W Alameda Pkwy, Morrison, CO".to_string(),
                coordinates: (39.6654, -105.2057),
            },
            rating: 4.8,
            tags: vec!["hiking".to_string(), "views".to_string(), "nature".to_string()],
        },
        Activity {
            id: "clear-creek-rafting".to_string(),
            name: "Clear Creek Whitewater Rafting".to_string(),
            description: "Guided class III rapids half-day out of Idaho Springs.".to_string(),
            category: "adventure".to_string(),
            duration_hours: 4.0,
            cost: 65.0,
            location: ActivityLocation {
                address: "Idaho Springs, CO".to_string(),
                coordinates: (39.7420, -105.5128),
            },
            rating: 4.7,
            tags: vec!["rafting".to_string(), "adrenaline".to_string(), "water".to_string()],
        },
        Activity {
            id: "argo-gold-mine-tour".to_string(),
            name: "Argo Gold Mine Tour".to_string(),
            description: "Walk the mill and pan for gold where the ore came down.".to_string(),
            category: "history".to_string(),
            duration_hours: 2.0,
            cost: 28.0,
            location: ActivityLocation {
                address: "2350 Riverside Dr, Idaho Springs, CO".to_string(),
                coordinates: (39.7444, -105.5097),
            },
            rating: 4.4,
            tags: vec!["mining".to_string(), "history".to_string(), "family".to_string()],
        },
        Activity {
            id: "mount-princeton-hot-springs".to_string(),
            name: "Mount Princeton Hot Springs Soak".to_string(),
            description: "Creekside pools fed by the springs, towels included.".to_string(),
            category: "relaxation".to_string(),
            duration_hours: 3.0,
            cost: 30.0,
            location: ActivityLocation {
                address: "15870 County Road 162, Nathrop, CO".to_string(),
                coordinates: (38.7327, -106.1616),
            },
            rating: 4.6,
            tags: vec!["hot springs".to_string(), "spa".to_string(), "scenic".to_string()],
        },
        Activity {
            id: "larimer-square-food-crawl".to_string(),
            name: "Larimer Square Food Crawl".to_string(),
            description: "Four stops across Denver's oldest block, dessert last.".to_string(),
            category: "food & drink".to_string(),
            duration_hours: 2.5,
            cost: 55.0,
            location: ActivityLocation {
                address: "Larimer Square, Denver, CO".to_string(),
                coordinates: (39.7477, -104.9989),
            },
            rating: 4.5,
            tags: vec!["food".to_string(), "nightlife".to_string(), "local".to_string()],
        },
    ]
}

fn bali() -> Vec<Activity> {
    vec![
        Activity {
            id: "tegallalang-terraces".to_string(),
            name: "Tegallalang Rice Terrace Walk".to_string(),
            description: "Morning walk along the terraced paddies north of Ubud.".to_string(),
            category: "nature".to_string(),
            duration_hours: 2.0,
            cost: 5.0,
            location: ActivityLocation {
                address: "Tegallalang, Gianyar, Bali".to_string(),
                coordinates: (-8.4312, 115.2777),
            },
            rating: 4.6,
            tags: vec![
                "nature".to_string(),
                "photography".to_string(),
                "walking".to_string(),
            ],
        },
        Activity {
            id: "uluwatu-sunset-kecak".to_string(),
            name: "Uluwatu Temple Sunset & Kecak Dance".to_string(),
            description: "Clifftop temple at dusk with the fire dance at sundown.".to_string(),
            category: "culture".to_string(),
            duration_hours: 2.5,
            cost: 15.0,
            location: ActivityLocation {
                address: "Pecatu, South Kuta, Bali".to_string(),
                coordinates: (-8.8291, 115.0849),
            },
            rating: 4.7,
            tags: vec![
                "temple".to_string(),
                "sunset".to_string(),
                "performance".to_string(),
            ],
        },
        Activity {
            id: "mount-batur-sunrise".to_string(),
            name: "Mount Batur Sunrise Trek".to_string(),
            description: "Pre-dawn climb to the crater rim for sunrise over the lake."
                .to_string(),
            category: "adventure".to_string(),
            duration_hours: 6.0,
            cost: 40.0,
            location: ActivityLocation {
                address: "Kintamani, Bangli, Bali".to_string(),
                coordinates: (-8.2422, 115.3756),
            },
            rating: 4.8,
            tags: vec!["hiking".to_string(), "sunrise".to_string(), "volcano".to_string()],
        },
        Activity {
            id: "ubud-cooking-class".to_string(),
            name: "Ubud Balinese Cooking Class".to_string(),
            description: "Market shop first, then cook a six-dish Balinese lunch.".to_string(),
            category: "food & drink".to_string(),
            duration_hours: 4.0,
            cost: 35.0,
            location: ActivityLocation {
                address: "Ubud, Gianyar, Bali".to_string(),
                coordinates: (-8.5069, 115.2625),
            },
            rating: 4.9,
            tags: vec!["food".to_string(), "cooking".to_string(), "local".to_string()],
        },
        Activity {
            id: "riverside-spa-afternoon".to_string(),
            name: "Riverside Spa Afternoon".to_string(),
            description: "Two-hour massage and flower bath above the Campuhan river."
                .to_string(),
            category: "relaxation".to_string(),
            duration_hours: 2.0,
            cost: 50.0,
            location: ActivityLocation {
                address: "Campuhan, Ubud, Bali".to_string(),
                coordinates: (-8.5049, 115.2550),
            },
            rating: 4.7,
            tags: vec!["spa".to_string(), "massage".to_string(), "wellness".to_string()],
        },
    ]
}
