pub mod application {
    pub mod consumption {
        pub mod get_history;
    }
    pub mod daily_status {
        pub mod get_today;
        pub mod set_status;
    }
    pub mod ingredient {
        pub mod classify;
        pub mod consume;
        pub mod create;
        pub mod extract_label;
        pub mod list_active;
    }
    pub mod stats {
        pub mod get_at_risk;
        pub mod summarize;
    }
}

pub mod domain {
    pub mod clock;
    pub mod errors;
    pub mod logger;
    pub mod consumption {
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_history;
        }
    }
    pub mod daily_status {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod rules;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_today;
            pub mod set_status;
        }
    }
    pub mod ingredient {
        pub mod classifier;
        pub mod draft;
        pub mod errors;
        pub mod freshness;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod shelf_life;
        pub mod value_objects;
        pub mod use_cases {
            pub mod classify;
            pub mod consume;
            pub mod create;
            pub mod extract_label;
            pub mod list_active;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod stats {
        pub mod aggregator;
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get_at_risk;
            pub mod summarize;
        }
    }
    pub mod user {
        pub mod model;
    }
}
