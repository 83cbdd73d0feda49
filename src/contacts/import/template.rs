//! Example delimited-text document offered to first-time importers.

/// Default file name for the downloadable template.
pub const TEMPLATE_FILE_NAME: &str = "contacts_template.csv";

const CONTACT_TEMPLATE: &str = "\
name,phone,email,role,organization
Rajesh Kumar,9876543210,rajesh.kumar@example.com,payer_contact,ESIC
Priya Sharma,9123456780,priya.sharma@example.com,hospital_contact,City Care Hospital
Anil Mehta,+919988776655,anil.mehta@example.com,tpa_contact,MediAssist TPA
";

/// Header row followed by three illustrative contacts.
pub fn contact_template() -> &'static str {
    CONTACT_TEMPLATE
}
