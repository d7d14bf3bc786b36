use biocontact::engine::center::CenterPolicy;

pub struct DefaultsConfig {
    pub center_policy: CenterPolicy,
    pub output_dir: String,
    pub render_plots: bool,
    pub fetch_base_url: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            center_policy: CenterPolicy::MassWeighted,
            output_dir: "contact-maps".to_string(),
            render_plots: true,
            fetch_base_url: "https://files.rcsb.org/download".to_string(),
        }
    }
}
