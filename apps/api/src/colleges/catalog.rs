//! Built-in college table used by the nearby-college finder.

use serde::{Deserialize, Serialize};

use crate::colleges::radius::{Coordinates, Located};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub college_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl College {
    fn new(
        id: &str,
        name: &str,
        city: &str,
        state: &str,
        (latitude, longitude): (f64, f64),
        college_type: &str,
        website: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            country: "India".to_string(),
            latitude,
            longitude,
            college_type: college_type.to_string(),
            website: Some(website.to_string()),
        }
    }
}

impl Located for College {
    fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    fn category(&self) -> &str {
        &self.college_type
    }
}

pub fn indian_colleges() -> Vec<College> {
    vec![
        College::new(
            "1",
            "Indian Institute of Technology Delhi",
            "New Delhi",
            "Delhi",
            (28.5451, 77.1925),
            "Engineering",
            "https://home.iitd.ac.in/",
        ),
        College::new(
            "2",
            "Delhi University",
            "New Delhi",
            "Delhi",
            (28.6881, 77.2120),
            "General",
            "https://www.du.ac.in/",
        ),
        College::new(
            "3",
            "Jamia Millia Islamia",
            "New Delhi",
            "Delhi",
            (28.5626, 77.2770),
            "General",
            "https://www.jmi.ac.in/",
        ),
        College::new(
            "4",
            "Indian Institute of Technology Bombay",
            "Mumbai",
            "Maharashtra",
            (19.1334, 72.9133),
            "Engineering",
            "https://www.iitb.ac.in/",
        ),
        College::new(
            "5",
            "University of Mumbai",
            "Mumbai",
            "Maharashtra",
            (19.0760, 72.8777),
            "General",
            "https://mu.ac.in/",
        ),
        College::new(
            "6",
            "Indian Institute of Technology Madras",
            "Chennai",
            "Tamil Nadu",
            (12.9915, 80.2337),
            "Engineering",
            "https://www.iitm.ac.in/",
        ),
        College::new(
            "7",
            "Anna University",
            "Chennai",
            "Tamil Nadu",
            (12.9716, 80.2206),
            "Engineering",
            "https://www.annauniv.edu/",
        ),
        College::new(
            "8",
            "Indian Institute of Technology Kanpur",
            "Kanpur",
            "Uttar Pradesh",
            (26.5123, 80.2329),
            "Engineering",
            "https://www.iitk.ac.in/",
        ),
        College::new(
            "9",
            "Indian Institute of Technology Kharagpur",
            "Kharagpur",
            "West Bengal",
            (22.3149, 87.3105),
            "Engineering",
            "https://www.iitkgp.ac.in/",
        ),
        College::new(
            "10",
            "Indian Institute of Science",
            "Bangalore",
            "Karnataka",
            (13.0219, 77.5673),
            "Research",
            "https://www.iisc.ac.in/",
        ),
        College::new(
            "11",
            "Indian Institute of Technology Bangalore",
            "Bangalore",
            "Karnataka",
            (12.9901, 77.5558),
            "Engineering",
            "https://www.iisc.ac.in/",
        ),
        College::new(
            "12",
            "National Institute of Technology Trichy",
            "Tiruchirappalli",
            "Tamil Nadu",
            (10.7589, 78.8158),
            "Engineering",
            "https://www.nitt.edu/",
        ),
        College::new(
            "13",
            "Indian Institute of Technology Roorkee",
            "Roorkee",
            "Uttarakhand",
            (29.8668, 77.8961),
            "Engineering",
            "https://www.iitr.ac.in/",
        ),
        College::new(
            "14",
            "Indian Institute of Technology Guwahati",
            "Guwahati",
            "Assam",
            (26.1899, 91.6956),
            "Engineering",
            "https://www.iitg.ac.in/",
        ),
        College::new(
            "15",
            "Indian Institute of Technology Hyderabad",
            "Hyderabad",
            "Telangana",
            (17.5922, 78.1257),
            "Engineering",
            "https://www.iith.ac.in/",
        ),
        College::new(
            "16",
            "Osmania University",
            "Hyderabad",
            "Telangana",
            (17.4065, 78.4772),
            "General",
            "https://www.osmania.ac.in/",
        ),
        College::new(
            "17",
            "Indian Institute of Technology Indore",
            "Indore",
            "Madhya Pradesh",
            (22.5204, 75.9207),
            "Engineering",
            "https://www.iiti.ac.in/",
        ),
        College::new(
            "18",
            "Indian Institute of Technology Bhubaneswar",
            "Bhubaneswar",
            "Odisha",
            (20.2961, 85.8245),
            "Engineering",
            "https://www.iitbbs.ac.in/",
        ),
        College::new(
            "19",
            "Indian Institute of Technology Gandhinagar",
            "Gandhinagar",
            "Gujarat",
            (23.2156, 72.6369),
            "Engineering",
            "https://www.iitgn.ac.in/",
        ),
        College::new(
            "20",
            "Indian Institute of Technology Ropar",
            "Rupnagar",
            "Punjab",
            (30.9658, 76.5264),
            "Engineering",
            "https://www.iitrpr.ac.in/",
        ),
    ]
}
