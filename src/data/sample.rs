use crate::record::{BlockRecord, ConnectionRecord, RoadmapDefinition};

/// `(id, title, category, months, cost)`
const SAMPLE_BLOCKS: &[(&str, &str, &str, f64, f64)] = &[
    ("prospective", "Prospective Immigrant", "Status", 0.0, 0.0),
    ("temp_resident", "Temporary Resident", "Status", 1.0, 200.0),
    ("perm_resident", "Permanent Residency", "Status", 6.0, 500.0),
    ("asylum", "Asylum/Refugee", "Status", 12.0, 0.0),
    ("citizenship", "Citizenship", "Status", 6.0, 630.0),
    ("etravel", "E-Travel Visa", "Entry", 0.5, 50.0),
    ("digital_nomad", "Digital Nomad Visa", "Entry", 2.0, 200.0),
    ("visitor", "Visitor", "Entry", 0.5, 100.0),
    ("study", "Study", "Core", 12.0, 15000.0),
    ("spouse_family", "Spouse/Family", "Core", 6.0, 1000.0),
    ("startup_visa", "Startup Visa", "Core", 6.0, 4000.0),
    ("investor", "Foreign Investor", "Core", 6.0, 10000.0),
    ("lmia", "LMIA", "Core", 3.0, 1000.0),
    ("permit_open", "Work Permit Open", "Core", 2.0, 155.0),
    ("permit_closed", "Work Permit Closed", "Core", 2.0, 155.0),
    ("express_entry", "Express Entry", "Core", 6.0, 1325.0),
    ("nom_prov", "Nomination Provincial", "Core", 9.0, 1000.0),
    ("nom_atlantic", "Nomination Atlantic", "Core", 9.0, 1000.0),
    ("nom_rural", "Nomination Rural Community", "Core", 9.0, 1000.0),
    ("equitable_employment", "Equitable Employment", "Employment", 3.0, 0.0),
    ("equitable_employment_study", "Equitable Employment with Study", "Employment", 3.0, 0.0),
    ("under_employed", "Under Employed", "Employment", 6.0, 0.0),
    ("unemployed", "Unemployed", "Employment", 6.0, 0.0),
    ("marriage_cert", "Marriage Certificate", "Entry", 1.0, 100.0),
    ("rental", "Rental", "Economics", 1.0, 1200.0),
    ("homeownership", "Homeownership", "Economics", 6.0, 30000.0),
    ("retail_investment", "Retail Investment", "Economics", 3.0, 5000.0),
];

const SAMPLE_CONNECTIONS: &[(&str, &str)] = &[
    ("prospective", "study"),
    ("prospective", "startup_visa"),
    ("prospective", "investor"),
    ("prospective", "rental"),
    ("study", "permit_open"),
    ("study", "spouse_family"),
    ("spouse_family", "permit_open"),
    ("rental", "homeownership"),
    ("rental", "unemployed"),
    ("unemployed", "under_employed"),
    ("under_employed", "equitable_employment"),
    ("startup_visa", "lmia"),
    ("startup_visa", "equitable_employment"),
    ("lmia", "equitable_employment"),
    ("investor", "lmia"),
    ("permit_open", "unemployed"),
    ("permit_open", "temp_resident"),
    ("permit_open", "equitable_employment"),
    ("equitable_employment", "permit_closed"),
    ("permit_closed", "temp_resident"),
    ("rental", "perm_resident"),
];

/// A small Canadian immigration roadmap, for demos and tests.
///
/// This is reference data, never a stand-in for a data source that failed to load.
pub fn sample_roadmap() -> RoadmapDefinition {
    RoadmapDefinition {
        blocks: SAMPLE_BLOCKS
            .iter()
            .map(|&(id, title, category, months, cost)| {
                BlockRecord::new(id, title, category, months, cost)
            })
            .collect(),
        connections: SAMPLE_CONNECTIONS
            .iter()
            .map(|&(from, to)| ConnectionRecord::new(from, to))
            .collect(),
    }
}
