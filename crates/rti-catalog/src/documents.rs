//! Department → template document table.
//!
//! Templates are grouped into categories. Delhi and Telangana templates live
//! under `<region-slug>/<category folder>/`, Jammu and Kashmir templates under
//! the certified archive folder [`JAMMU_AND_KASHMIR_ARCHIVE`]. Folder and file
//! names are the on-disk names, misspellings included.

use std::{collections::HashMap, sync::LazyLock};

use serde::Serialize;

use crate::region::RegionId;

/// Root folder holding every Jammu and Kashmir template.
pub const JAMMU_AND_KASHMIR_ARCHIVE: &str = "RTI_Jammu_and_Kashmir_FULL_CERTIFIED_FINAL";

/// A named group of departments shown together on listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSection {
    pub region: RegionId,
    pub title: &'static str,
    pub departments: Vec<&'static str>,
}

struct Category {
    region: RegionId,
    /// Display title; differs from `folder` where the folder name is misspelled.
    title: &'static str,
    folder: &'static str,
    /// (department display name, file name)
    documents: &'static [(&'static str, &'static str)],
}

impl Category {
    fn root(&self) -> &'static str {
        match self.region {
            RegionId::JammuAndKashmir => JAMMU_AND_KASHMIR_ARCHIVE,
            region => region.slug(),
        }
    }

    fn path(&self, file: &str) -> String {
        format!("{}/{}/{}", self.root(), self.folder, file)
    }
}

static DOCUMENT_PATHS: LazyLock<HashMap<&'static str, String>> = LazyLock::new(|| {
    CATEGORIES
        .iter()
        .flat_map(|category| {
            category
                .documents
                .iter()
                .map(move |&(department, file)| (department, category.path(file)))
        })
        .collect()
});

/// Returns the relative template path for a department, if one is mapped.
///
/// The key must match exactly, case included. The path is not checked
/// against the filesystem.
pub fn resolve_path(department: &str) -> Option<&'static str> {
    DOCUMENT_PATHS.get(department).map(String::as_str)
}

/// Returns true if the department has a mapped template.
pub fn has_document(department: &str) -> bool {
    DOCUMENT_PATHS.contains_key(department)
}

/// Number of mapped templates.
pub fn document_count() -> usize {
    DOCUMENT_PATHS.len()
}

/// Every mapped department name, in table order.
pub fn mapped_departments() -> impl Iterator<Item = &'static str> {
    CATEGORIES
        .iter()
        .flat_map(|category| category.documents.iter().map(|&(department, _)| department))
}

/// Department categories for a region, in table order.
pub fn department_sections(region: RegionId) -> Vec<DepartmentSection> {
    CATEGORIES
        .iter()
        .filter(|category| category.region == region)
        .map(|category| DepartmentSection {
            region,
            title: category.title,
            departments: category.documents.iter().map(|&(department, _)| department).collect(),
        })
        .collect()
}

static CATEGORIES: &[Category] = &[
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Police & Security",
        folder: "RTI Delhi Police & Security",
        documents: &[
            ("RTI Delhi Police", "RTI Template For Delhi Police.pdf"),
            (
                "RTI Delhi Fire Services Department",
                "RTI Template For Delhi Fire Services Department.pdf",
            ),
            ("RTI Delhi Prisons Department", "RTI Template For Delhi Prisoners Department.pdf"),
            ("RTI Delhi Home Department", "RTI Template For Delhi Home Department.pdf"),
            ("RTI Delhi Judicial Department", "RTI Template For Delhi Judicial Department.pdf"),
            (
                "RTI Delhi Law, Justice & Legislative Affairs Department",
                "RTI Template For Delhi Law, Justice & Legislative Affairs Department.pdf",
            ),
            (
                "RTI Delhi Disaster Management Department",
                "RTI Template For  Delhi Disaster Management Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Municipal & Housing",
        folder: "RTI Delhi Municipal & Housing",
        documents: &[
            (
                "RTI Delhi Municipal Corporation (MCD)",
                "RTI Template For  Delhi Municipal Corporation (MCD).pdf",
            ),
            (
                "RTI Delhi Urban Development Department",
                "RTI Template For Delhi Urban Development Department.pdf",
            ),
            (
                "RTI Delhi Housing & Urban Development Department",
                "RTI Template For  Delhi Housing & Urban Development Department.pdf",
            ),
            (
                "RTI Delhi Public Works Department (PWD)",
                "RTI Template For Delhi Public Works Department (PWD).pdf",
            ),
            (
                "RTI Delhi Rural Development Department",
                "RTI Template For Delhi Rural Development Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Utilities & Infrastructure",
        folder: "RTI Delhi Utilities & Infrastructure",
        documents: &[
            ("RTI Delhi Jal Board (DJB)", "RTI Templare For Delhi Jal Board (DJB).pdf"),
            ("RTI Delhi Transco Limited (DTL)", "RTI Template For Delhi Transco Limited (DTL).pdf"),
            ("RTI Delhi Power Department", "RTI Delhi Power Department.pdf"),
            (
                "RTI Delhi Water Supply Department",
                "RTI Template For Delhi Water Supply Department.pdf",
            ),
            (
                "RTI Delhi Ground Water Department",
                "RTI Template for Delhi Ground Water Department.pdf",
            ),
            (
                "RTI Delhi Irrigation & Flood Control Department",
                "RTI Template for Delhi Irrigation & Flood Control Department.pdf",
            ),
            (
                "RTI Delhi Renewable Energy Department",
                "RTI Template for Delhi Renewable Energy Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Government Services",
        folder: "RTI Delhi Government Services",
        documents: &[
            ("RTI Delhi Revenue Department", "RTI Template for Delhi Revenue Department.pdf"),
            ("RTI Delhi Education Department", "RTI Template for Delhi Education Department.pdf"),
            (
                "RTI Delhi Health & Family Welfare Department",
                "RTI Template for Delhi Health & Family Welfare.pdf",
            ),
            ("RTI Delhi Transport Department", "RTI Template for Delhi Transport Department.pdf"),
            ("RTI Delhi Finance Department", "RTI Template for Delhi Finance Department.pdf"),
            (
                "RTI Delhi Registration & Stamps Department",
                "RTI Template for Delhi Registration & Stamps Department.pdf",
            ),
            ("RTI Delhi Planning Department", "RTI Template for Delhi Planning Department.pdf"),
        ],
    },
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Social Welfare",
        folder: "RTI Delhi Social Welfare",
        documents: &[
            (
                "RTI Delhi Social Welfare Department",
                "RTI Template for Delhi Social Welfare Department.pdf",
            ),
            (
                "RTI Delhi Scheduled Castes & Scheduled Tribes Welfare Department",
                "RTI Template for Delhi Scheduled Castes & Scheduled Tribes Welfare Department.pdf",
            ),
            (
                "RTI Delhi Women & Child Development Department",
                "RTI Template for Delhi Women & Child Development Department.pdf",
            ),
            (
                "RTI Delhi Backward Classes Welfare Department",
                "RTI Template for Delhi Backward Classes Welfare Department.pdf",
            ),
            (
                "RTI Delhi Minority Affairs Department",
                "RTI Template for Delhi Minority Affairs Department.pdf",
            ),
            (
                "RTI Delhi Youth & Sports Department",
                "RTI Template for Delhi Youth & Sports Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Commerce & Industry",
        folder: "RTI Delhi Commerce & Industry",
        documents: &[
            ("RTI Delhi Labour Department", "RTI Template for Delhi Labour Department.pdf"),
            ("RTI Delhi Industries Department", "RTI Template for Delhi Industries Department.pdf"),
            (
                "RTI Delhi Value Added Tax Department",
                "RTI Template for Delhi Value Added Tax Department.pdf",
            ),
            (
                "RTI Delhi Food, Civil Supplies & Consumer Affairs Department",
                "RTI Template for Delhi Food, Civil Supplies & Consumer Affairs Department.pdf",
            ),
            (
                "RTI Delhi Consumer Affairs Department",
                "RTI Template for Delhi Consumer Affairs Department.pdf",
            ),
            (
                "RTI Delhi Cooperation Department",
                "RTI Template for Delhi Cooperation Department.pdf",
            ),
            (
                "RTI Delhi Agricultural Marketing Department",
                "RTI Template for Delhi Agricultural Marketing Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Environment & Resources",
        folder: "RTI Delhi Environment & Resources",
        documents: &[
            (
                "RTI Delhi Environment Department",
                "RTI Template for Delhi Environment Department.pdf",
            ),
            (
                "RTI Delhi Forest & Wildlife Department",
                "RTI Template for Delhi Forest & Wildlife Department.pdf",
            ),
            (
                "RTI Delhi Mines & Geology Department",
                "RTI Template for Delhi Mines & Geology Department.pdf",
            ),
            (
                "RTI Delhi Science & Technology Department",
                "RTI Template for Delhi Science & Technology Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Culture & Tourism",
        folder: "RTI Delhi Culture & Tourism",
        documents: &[
            ("RTI Delhi Tourism Department", "RTI Template for Delhi Tourism Department.pdf"),
            (
                "RTI Delhi Art, Culture & Languages Department",
                "RTI Template for Delhi Art, Culture & Languages Department.pdf",
            ),
            (
                "RTI Delhi Archaeology Department",
                "RTI Template for Delhi Archaeology Department.pdf",
            ),
            (
                "RTI Delhi Handloom & Handicrafts Department",
                "RTI Template for Delhi Handloom & Handicrafts Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Information & Technology",
        folder: "RTI Delhi Information & Technology",
        documents: &[
            (
                "RTI Delhi Information & Publicity Department",
                "RTI Template for Delhi Information & Publicity Department.pdf",
            ),
            (
                "RTI Delhi Information Technology Department",
                "RTI Template for Delhi Information Technology Department.pdf",
            ),
            (
                "RTI Delhi Telecommunications Department",
                "RTI Template for Delhi Telecommunications Department.pdf",
            ),
            (
                "RTI Delhi Postal Services Department",
                "RTI Template for Delhi Postal Services Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Delhi,
        title: "RTI Delhi Financial Services",
        folder: "RTI Delhi Financial Services",
        documents: &[
            (
                "RTI Delhi Banking & Financial Services Department",
                "RTI Template for Delhi Banking & Financial Services Department.pdf",
            ),
            ("RTI Delhi Insurance Department", "RTI Template for Delhi Insurance Department.pdf"),
            ("RTI Delhi Pension Department", "RTI Template for Delhi Pension Department.pdf"),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Police & Security",
        folder: "RTI Telangana Police & Security",
        documents: &[
            ("RTI Telangana Police Department", "RTI Template for Telangana Police Department.pdf"),
            (
                "RTI Telangana Fire Services Department",
                "RTI Template for Telangana Fire Services Department.pdf",
            ),
            (
                "RTI Telangana Prisons Department",
                "RTI Template for Telangana Prisons Department.pdf",
            ),
            ("RTI Telangana Home Department", "RTI Template for Telangana Home Department.pdf"),
            ("RTI Telangana Law Department", "RTI Template for Telangana Law Department.pdf"),
            (
                "RTI Telangana Disaster Management Department",
                "RTI Template for Telangana Disaster Management Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Municipal & Housing",
        folder: "RTI Telangana Muncipal & Housing",
        documents: &[
            (
                "RTI Greater Hyderabad Municipal Corporation (GHMC)",
                "RTI Template for Greater Hyderabad Municipal Corporation (GHMC).pdf",
            ),
            (
                "RTI Telangana Municipal Administration & Urban Development Department",
                "RTI Template for Telangana Municipal Administration & Urban Development Department (MA&UD).pdf",
            ),
            (
                "RTI Telangana Housing Department",
                "RTI Template for Telangana Housing Department.pdf",
            ),
            (
                "RTI Telangana Public Works Department (PWD)",
                "RTI Template for Telangana Public Works Department (PWD).pdf",
            ),
            (
                "RTI Telangana Panchayat Raj & Rural Development Department",
                "RTI Template for Telangana Panchayat Raj & Rural Development Department.pdf",
            ),
            (
                "RTI Telangana Urban Development Department",
                "RTI Template for Telangana Urban Development Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Utilities & Infrastructure",
        folder: "RTI Telangana Utilities & Infrastructure",
        documents: &[
            ("RTI Telangana Energy Department", "RTI Template for Telangana Energy Department.pdf"),
            (
                "RTI Telangana State Transmission Corporation (TSTRANSCO)",
                "RTI Template for Telangana State Transmission Corporation (TSTRANSCO).pdf",
            ),
            (
                "RTI Telangana State Power Generation Corporation (TSGENCO)",
                "RTI Template for Telangana State Power Generation Corporation (TSGENCO).pdf",
            ),
            (
                "RTI Telangana State Southern Power Distribution Company (TSSPDCL)",
                "RTI Template for Telangana State Southern Power Distribution Company (TSSPDCL).pdf",
            ),
            (
                "RTI Telangana State Northern Power Distribution Company (TSNPDCL)",
                "RTI Template for Telangana State Northern Power Distribution Company (TSNPDCL).pdf",
            ),
            (
                "RTI Telangana Irrigation & CAD Department",
                "RTI Template for Telangana Irrigation & CAD Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Government Services",
        folder: "RTI Telangana Government Services",
        documents: &[
            ("RTI Telangana Secretariat", "RTI Template for Telangana Secretariat.pdf"),
            (
                "RTI Telangana Revenue Department",
                "RTI Template for Telangana Revenue Department.pdf",
            ),
            (
                "RTI Telangana Education Department",
                "RTI Template for Telangana Education Department.pdf",
            ),
            (
                "RTI Telangana Health & Family Welfare Department",
                "RTI Template for Telangana Health & Family Welfare Department.pdf",
            ),
            (
                "RTI Telangana Transport Department",
                "RTI Template for Telangana Transport Department.pdf",
            ),
            (
                "RTI Telangana Finance Department",
                "RTI Template for Telangana Finance Department.pdf",
            ),
            (
                "RTI Telangana Registration & Stamps Department",
                "RTI Template for Telangana Registration & Stamps Department.pdf",
            ),
            (
                "RTI Telangana Planning Department",
                "RTI Template for Telangana Planning Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Social Welfare",
        folder: "RTI Telanganga Social Welfare",
        documents: &[
            (
                "RTI Telangana Social Welfare Department",
                "RTI Template for Telangana Social Welfare Department.pdf",
            ),
            (
                "RTI Telangana Scheduled Castes Development Department",
                "RTI Template for Telangana Scheduled Castes Development Department.pdf",
            ),
            (
                "RTI Telangana Scheduled Tribes Welfare Department",
                "RTI Template for Telangana Scheduled Tribes Welfare Department.pdf",
            ),
            (
                "RTI Telangana Women & Child Development Department",
                "RTI Template for Telangana Women & Child Development Department.pdf",
            ),
            (
                "RTI Telangana Backward Classes Welfare Department",
                "RTI Template for Telangana Backward Classes Welfare Department.pdf",
            ),
            (
                "RTI Telangana Minority Welfare Department",
                "RTI Template for Telangana Minority Welfare Department.pdf",
            ),
            (
                "RTI Telangana Youth & Sports Department",
                "RTI Template for Telangana Youth & Sports Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Commerce & Industry",
        folder: "RTI Telangana Commerce & Industry",
        documents: &[
            ("RTI Telangana Labour Department", "RTI TEMPLATE FOR TELANGANA LABOUR DEPARTMENT.pdf"),
            (
                "RTI Telangana Industries & Commerce Department",
                "RTI TEMPLATE FOR TELANGANA INDUSTRIES & COMMERCE DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Commercial Taxes Department",
                "RTI TEMPLATE FOR TELANGANA COMMERCIAL TAXES DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Food & Civil Supplies Department",
                "RTI TEMPLATE FOR TELANGANA FOOD & CIVIL SUPPLIES DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Agriculture & Cooperation Department",
                "RTI TEMPLATE FOR TELANGANA AGRICULTURE & COOPERATION DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Handlooms & Textiles Department",
                "RTI TEMPLATE FOR TELANGANA HANDLOOMS & TEXTILES DEPARTMENT.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Environment & Resources",
        folder: "RTI Telangana Environment & Resources",
        documents: &[
            (
                "RTI Telangana Environment Department",
                "RTI TEMPLATE FOR TELANGANA ENVIRONMENT DEPARTMENT.pdf",
            ),
            ("RTI Telangana Forest Department", "RTI TEMPLATE FOR TELANGANA FOREST DEPARTMENT.pdf"),
            (
                "RTI Telangana Mines & Geology Department",
                "RTI TEMPLATE FOR TELANGANA MINES & GEOLOGY DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Water Resources Department",
                "RTI TEMPLATE FOR TELANGANA WATER RESOURCES DEPARTMENT.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Culture & Tourism",
        folder: "RTI Telangana Culture & Tourism",
        documents: &[
            (
                "RTI Telangana Tourism & Culture Department",
                "RTI TEMPLATE FOR TELANGANA TOURISM & CULTURE DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Information & Public Relations Department",
                "RTI TEMPLATE FOR TELANGANA INFORMATION & PUBLIC RELATIONS DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Archaeology Department",
                "RTI TEMPLATE FOR TELANGANA ARCHAEOLOGY DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Endowments Department",
                "RTI TEMPLATE FOR TELANGANA ENDOWMENTS DEPARTMENT.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Information & Technology",
        folder: "RTI Telangana Information & Technology",
        documents: &[
            (
                "RTI Telangana Information Technology Department",
                "RTI TEMPLATE FOR TELANGANA INFORMATION TECHNOLOGY DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana State Technology Services (TSTS)",
                "RTI TEMPLATE FOR TELANGANA STATE TECHNOLOGY SERVICES (TSTS).pdf",
            ),
            (
                "RTI Telangana State FibreNet Limited",
                "RTI TEMPLATE FOR TELANGANA STATE FIBRENET LIMITED.pdf",
            ),
            (
                "RTI Telangana State Innovation Cell",
                "RTI TEMPLATE FOR TELANGANA STATE INNOVATION CELL.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::Telangana,
        title: "RTI Telangana Education & Health",
        folder: "RTI Telangana Education & Health",
        documents: &[
            (
                "RTI Telangana School Education Department",
                "RTI TEMPLATE FOR TELANGANA SCHOOL EDUCATION DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Higher Education Department",
                "RTI TEMPLATE FOR TELANGANA HIGHER EDUCATION DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Technical Education Department",
                "RTI TEMPLATE FOR TELANGANA TECHNICAL EDUCATION DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana Medical & Health Department",
                "RTI TEMPLATE FOR TELANGANA MEDICAL & HEALTH DEPARTMENT.pdf",
            ),
            (
                "RTI Telangana State Medical Services & Infrastructure Development Corporation (TSMSIDC)",
                "RTI TEMPLATE FOR TELANGANA STATE MEDICAL SERVICES & INFRASTRUCTURE DEVELOPMENT CORPORATION (TSMSIDC).pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir General Administration & Home Affairs",
        folder: "General Administration & Home Affairs",
        documents: &[
            (
                "RTI Jammu and Kashmir General Administration Department",
                "RTI_Jammu_and_Kashmir_General_Administration_Department.pdf",
            ),
            ("RTI Jammu and Kashmir Home Department", "RTI_Jammu_and_Kashmir_Home_Department.pdf"),
            (
                "RTI Jammu and Kashmir Police Department",
                "RTI_Jammu_and_Kashmir_Police_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Prisons Department",
                "RTI_Jammu_and_Kashmir_Prisons_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Law, Justice & Parliamentary Affairs Department",
                "RTI_Jammu_and_Kashmir_Law_Justice_and_Parliamentary_Affairs_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Disaster Management, Relief, Rehabilitation & Reconstruction Department",
                "RTI_Jammu_and_Kashmir_Disaster_Management_Relief_Rehabilitation_and_Reconstruction_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Election Department",
                "RTI_Jammu_and_Kashmir_Election_Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir Finance, Planning & Revenue",
        folder: "Finance, Planning & Revenue",
        documents: &[
            (
                "RTI Jammu and Kashmir Finance Department",
                "RTI_Jammu_and_Kashmir_Finance_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Planning, Development & Monitoring Department",
                "RTI_Jammu_and_Kashmir_Planning_Development_and_Monitoring_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Revenue Department",
                "RTI_Jammu_and_Kashmir_Revenue_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Excise & Taxation Department",
                "RTI_Jammu_and_Kashmir_Excise_and_Taxation_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Registration & Stamps Department",
                "RTI_Jammu_and_Kashmir_Registration_and_Stamps_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Treasuries & Accounts Department",
                "RTI_Jammu_and_Kashmir_Treasuries_and_Accounts_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Estates Department",
                "RTI_Jammu_and_Kashmir_Estates_Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir Education & Skill Development",
        folder: "Education & Skill Development",
        documents: &[
            (
                "RTI Jammu and Kashmir School Education Department",
                "RTI_Jammu_and_Kashmir_School_Education_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Higher Education Department",
                "RTI_Jammu_and_Kashmir_Higher_Education_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Technical Education Department",
                "RTI_Jammu_and_Kashmir_Technical_Education_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Skill Development Department",
                "RTI_Jammu_and_Kashmir_Skill_Development_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Youth Services & Sports Department",
                "RTI_Jammu_and_Kashmir_Youth_Services_and_Sports_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Science & Technology Department",
                "RTI_Jammu_and_Kashmir_Science_and_Technology_Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir Health & Medical Services",
        folder: "Health & Medical Services",
        documents: &[
            (
                "RTI Jammu and Kashmir Health & Medical Education Department",
                "RTI_Jammu_and_Kashmir_Health_and_Medical_Education_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir AYUSH Department",
                "RTI_Jammu_and_Kashmir_AYUSH_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Food, Civil Supplies & Consumer Affairs Department",
                "RTI_Jammu_and_Kashmir_Food_Civil_Supplies_and_Consumer_Affairs_Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir Infrastructure & Development",
        folder: "Infrastructure & Development",
        documents: &[
            (
                "RTI Jammu and Kashmir Public Works (R&B) Department",
                "RTI_Jammu_and_Kashmir_Public_Works_(RandB)_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Housing & Urban Development Department",
                "RTI_Jammu_and_Kashmir_Housing_and_Urban_Development_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Transport Department",
                "RTI_Jammu_and_Kashmir_Transport_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Power Development Department",
                "RTI_Jammu_and_Kashmir_Power_Development_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Jal Shakti Department",
                "RTI_Jammu_and_Kashmir_Jal_Shakti_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Rural Development Department",
                "RTI_Jammu_and_Kashmir_Rural_Development_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Panchayati Raj Department",
                "RTI_Jammu_and_Kashmir_Panchayati_Raj_Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir Agriculture & Rural Economy",
        folder: "Agriculture & Rural Economy",
        documents: &[
            (
                "RTI Jammu and Kashmir Agriculture Production & Farmer Welfare Department",
                "RTI_Jammu_and_Kashmir_Agriculture_Production_and_Farmer_Welfare_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Horticulture Department",
                "RTI_Jammu_and_Kashmir_Horticulture_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Animal & Sheep Husbandry Department",
                "RTI_Jammu_and_Kashmir_Animal_and_Sheep_Husbandry_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Cooperative Department",
                "RTI_Jammu_and_Kashmir_Cooperative_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Fisheries Department",
                "RTI_Jammu_and_Kashmir_Fisheries_Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir Industries, Commerce & Tourism",
        folder: "Industries, Commerce & Tourism",
        documents: &[
            (
                "RTI Jammu and Kashmir Industries & Commerce Department",
                "RTI_Jammu_and_Kashmir_Industries_and_Commerce_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Handloom & Handicrafts Department",
                "RTI_Jammu_and_Kashmir_Handloom_and_Handicrafts_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Tourism Department",
                "RTI_Jammu_and_Kashmir_Tourism_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Geology & Mining Department",
                "RTI_Jammu_and_Kashmir_Geology_and_Mining_Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir Environment & Forest",
        folder: "Environment & Forest",
        documents: &[
            (
                "RTI Jammu and Kashmir Forest, Ecology & Environment Department",
                "RTI_Jammu_and_Kashmir_Forest_Ecology_and_Environment_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Wildlife Protection Department",
                "RTI_Jammu_and_Kashmir_Wildlife_Protection_Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir Social Welfare & Employment",
        folder: "Social Welfare & Employment",
        documents: &[
            (
                "RTI Jammu and Kashmir Social Welfare Department",
                "RTI_Jammu_and_Kashmir_Social_Welfare_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Labour & Employment Department",
                "RTI_Jammu_and_Kashmir_Labour_and_Employment_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Tribal Affairs Department",
                "RTI_Jammu_and_Kashmir_Tribal_Affairs_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Backward Classes & Minorities Department",
                "RTI_Jammu_and_Kashmir_Backward_Classes_and_Minorities_Department.pdf",
            ),
        ],
    },
    Category {
        region: RegionId::JammuAndKashmir,
        title: "RTI Jammu and Kashmir Information Technology & Culture",
        folder: "Information Technology & Culture",
        documents: &[
            (
                "RTI Jammu and Kashmir Information Technology Department",
                "RTI_Jammu_and_Kashmir_Information_Technology_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir e-Governance Department",
                "RTI_Jammu_and_Kashmir_e-Governance_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Information & Public Relations Department",
                "RTI_Jammu_and_Kashmir_Information_and_Public_Relations_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Culture Department",
                "RTI_Jammu_and_Kashmir_Culture_Department.pdf",
            ),
            (
                "RTI Jammu and Kashmir Archives, Archaeology & Museums Department",
                "RTI_Jammu_and_Kashmir_Archives_Archaeology_and_Museums_Department.pdf",
            ),
        ],
    },
];
