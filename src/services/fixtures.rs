use crate::models::{Candidate, DistrictType, Internship, Sector, SocialCategory};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in sample candidates, used when no snapshot file is configured
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "C001".to_string(),
            name: "Priya Sharma".to_string(),
            skills: strings(&["Python", "Machine Learning", "Data Analysis", "SQL"]),
            qualification: "BTech Computer Science".to_string(),
            cgpa: 8.5,
            experience_months: 6,
            preferred_locations: strings(&["Mumbai", "Pune", "Bangalore"]),
            remote_ok: true,
            sector_interests: vec![Sector::Technology, Sector::Finance],
            social_category: SocialCategory::General,
            district_type: DistrictType::Urban,
            past_internships: 0,
        },
        Candidate {
            id: "C002".to_string(),
            name: "Arjun Kumar".to_string(),
            skills: strings(&["Java", "Spring Boot", "React", "Database Design"]),
            qualification: "BTech Information Technology".to_string(),
            cgpa: 7.8,
            experience_months: 3,
            preferred_locations: strings(&["Delhi", "Gurgaon", "Noida", "Patna"]),
            remote_ok: true,
            sector_interests: vec![Sector::Technology, Sector::Government],
            social_category: SocialCategory::Sc,
            district_type: DistrictType::Aspirational,
            past_internships: 0,
        },
        Candidate {
            id: "C003".to_string(),
            name: "Sneha Patel".to_string(),
            skills: strings(&["Finance", "Excel", "Data Visualization", "Risk Analysis"]),
            qualification: "BCom Finance".to_string(),
            cgpa: 8.2,
            experience_months: 4,
            preferred_locations: strings(&["Mumbai", "Ahmedabad", "Pune"]),
            remote_ok: false,
            sector_interests: vec![Sector::Finance, Sector::Technology],
            social_category: SocialCategory::Obc,
            district_type: DistrictType::Urban,
            past_internships: 1,
        },
        Candidate {
            id: "C004".to_string(),
            name: "Ramesh Yadav".to_string(),
            skills: strings(&["Agriculture", "Research", "Data Collection", "Rural Development"]),
            qualification: "BSc Agriculture".to_string(),
            cgpa: 7.5,
            experience_months: 2,
            preferred_locations: strings(&["Lucknow", "Kanpur", "Banda"]),
            remote_ok: false,
            sector_interests: vec![Sector::Agriculture, Sector::Government, Sector::Ngo],
            social_category: SocialCategory::Obc,
            district_type: DistrictType::Rural,
            past_internships: 0,
        },
        Candidate {
            id: "C005".to_string(),
            name: "Kavya Reddy".to_string(),
            skills: strings(&["Healthcare", "Medical Research", "Patient Care", "Data Analysis"]),
            qualification: "MBBS".to_string(),
            cgpa: 9.1,
            experience_months: 12,
            preferred_locations: strings(&["Hyderabad", "Chennai", "Bangalore"]),
            remote_ok: false,
            sector_interests: vec![Sector::Healthcare, Sector::Ngo],
            social_category: SocialCategory::General,
            district_type: DistrictType::Urban,
            past_internships: 2,
        },
    ]
}

/// Built-in sample internships matching the sample candidates
pub fn sample_internships() -> Vec<Internship> {
    vec![
        Internship {
            id: "I101".to_string(),
            company: "TechCorp India".to_string(),
            title: "Software Engineering Intern".to_string(),
            sector: Sector::Technology,
            required_skills: strings(&["Python", "Java", "React", "Database"]),
            location: "Bangalore".to_string(),
            remote_allowed: true,
            min_cgpa: 7.0,
            min_experience_months: 0,
            capacity: 10,
            rural_quota: 0.2,
        },
        Internship {
            id: "I102".to_string(),
            company: "FinanceAI Solutions".to_string(),
            title: "Data Science Intern".to_string(),
            sector: Sector::Finance,
            required_skills: strings(&["Python", "Machine Learning", "Data Analysis", "SQL"]),
            location: "Mumbai".to_string(),
            remote_allowed: false,
            min_cgpa: 8.0,
            min_experience_months: 3,
            capacity: 5,
            rural_quota: 0.15,
        },
        Internship {
            id: "I103".to_string(),
            company: "Bharat Rural Foundation".to_string(),
            title: "Rural Development Intern".to_string(),
            sector: Sector::Ngo,
            required_skills: strings(&["Rural Development", "Research", "Data Collection", "Agriculture"]),
            location: "Lucknow".to_string(),
            remote_allowed: false,
            min_cgpa: 6.5,
            min_experience_months: 0,
            capacity: 8,
            rural_quota: 0.5,
        },
        Internship {
            id: "I104".to_string(),
            company: "MedTech Innovations".to_string(),
            title: "Healthcare Analytics Intern".to_string(),
            sector: Sector::Healthcare,
            required_skills: strings(&["Healthcare", "Data Analysis", "Medical Research", "Statistics"]),
            location: "Hyderabad".to_string(),
            remote_allowed: true,
            min_cgpa: 8.5,
            min_experience_months: 6,
            capacity: 6,
            rural_quota: 0.1,
        },
        Internship {
            id: "I105".to_string(),
            company: "Ministry of Rural Development".to_string(),
            title: "Government Policy Intern".to_string(),
            sector: Sector::Government,
            required_skills: strings(&["Policy Analysis", "Research", "Public Administration", "Data Analysis"]),
            location: "Delhi".to_string(),
            remote_allowed: false,
            min_cgpa: 7.5,
            min_experience_months: 2,
            capacity: 12,
            rural_quota: 0.3,
        },
    ]
}
