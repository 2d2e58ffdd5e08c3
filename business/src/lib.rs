pub mod application {
    pub mod product {
        pub mod create;
        pub mod find_all;
        pub mod find_one;
        pub mod remove;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod pagination;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod find_all;
            pub mod find_one;
            pub mod remove;
            pub mod update;
        }
    }
}
