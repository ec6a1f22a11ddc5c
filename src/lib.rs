pub mod modules {
    pub mod sequencer {
        pub mod core {
            pub mod command;
            pub mod errors;
            pub mod pattern;
            pub mod store;
        }
        pub mod use_cases {
            pub mod get_default_pattern {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_pattern {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod save_pattern {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_tempo {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod set_tempo {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod parse_command {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
