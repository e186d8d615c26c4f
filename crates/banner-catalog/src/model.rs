use serde::{Deserialize, Serialize};

/// One page of search results, as the search endpoint returns it.
///
/// `total_count` is the server's declared size of the whole term catalog,
/// repeated on every page; `data` holds only this page's rows.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub total_count: usize,
    #[serde(default)]
    pub data: Vec<Course>,
}

/// One course section. Decoded from the search envelope; `description` never
/// comes off the wire and is filled in later from the scraped page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u64,
    pub course_reference_number: String,
    pub course_number: String,
    pub subject: String,
    pub schedule_type_description: String,
    pub course_title: String,
    #[serde(skip_deserializing)]
    pub description: String,
    pub credit_hours: Option<f64>,
    pub maximum_enrollment: i64,
    pub enrollment: i64,
    pub seats_available: i64,
    #[serde(default)]
    pub faculty: Vec<Faculty>,
    #[serde(default)]
    pub meetings_faculty: Vec<MeetingsFaculty>,
    #[serde(default)]
    pub section_attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub banner_id: String,
    pub course_reference_number: String,
    pub display_name: String,
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingsFaculty {
    pub category: String,
    pub course_reference_number: String,
    #[serde(default)]
    pub meeting_time: MeetingTime,
}

/// A meeting block. Unscheduled and online sections leave the time and
/// location fields null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingTime {
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    pub building: Option<String>,
    pub building_description: Option<String>,
    pub room: Option<String>,
    pub category: String,
    pub course_reference_number: String,
    pub start_date: String,
    pub end_date: String,
    pub hours_week: f64,
    pub meeting_type: String,
    pub meeting_type_description: String,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub code: String,
    pub description: String,
    pub course_reference_number: String,
}

/// The assembled artifact for one term: the declared total plus every course
/// in server page order, serialized with the same envelope keys the search
/// endpoint uses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub total_count: usize,
    pub data: Vec<Course>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_catalog_page() {
        let body = serde_json::json!({
            "totalCount": 1,
            "data": [{
                "id": 113_501,
                "courseReferenceNumber": "30412",
                "courseNumber": "041",
                "subject": "CPSC",
                "scheduleTypeDescription": "Lecture",
                "courseTitle": "Algorithms",
                "creditHours": null,
                "maximumEnrollment": 40,
                "enrollment": 38,
                "seatsAvailable": 2,
                "faculty": [{
                    "bannerId": "900123",
                    "courseReferenceNumber": "30412",
                    "displayName": "Brody, Joshua",
                    "emailAddress": null
                }],
                "meetingsFaculty": [{
                    "category": "01",
                    "courseReferenceNumber": "30412",
                    "meetingTime": {
                        "beginTime": "0930",
                        "endTime": "1045",
                        "building": "SCI",
                        "buildingDescription": "Science Center",
                        "room": "199",
                        "category": "01",
                        "courseReferenceNumber": "30412",
                        "startDate": "09/02/2024",
                        "endDate": "12/13/2024",
                        "hoursWeek": 2.5,
                        "meetingType": "CLAS",
                        "meetingTypeDescription": "Class",
                        "monday": true,
                        "tuesday": false,
                        "wednesday": true,
                        "thursday": false,
                        "friday": false,
                        "saturday": false,
                        "sunday": false
                    }
                }],
                "sectionAttributes": [{
                    "code": "NSEP",
                    "description": "Natural Sciences & Engineering Practicum",
                    "courseReferenceNumber": "30412"
                }]
            }]
        });

        let page: CatalogPage = serde_json::from_value(body).unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.data.len(), 1);

        let course = &page.data[0];
        assert_eq!(course.course_reference_number, "30412");
        assert_eq!(course.credit_hours, None);
        assert_eq!(course.description, "");
        assert_eq!(course.faculty[0].email_address, None);
        let meeting = &course.meetings_faculty[0].meeting_time;
        assert_eq!(meeting.begin_time.as_deref(), Some("0930"));
        assert!(meeting.monday && meeting.wednesday);
        assert_eq!(course.section_attributes[0].code, "NSEP");
    }

    #[test]
    fn test_decode_tolerates_missing_collections_and_nulls() {
        let body = serde_json::json!({
            "totalCount": 1,
            "data": [{
                "id": 7,
                "courseReferenceNumber": "10001",
                "courseNumber": "001",
                "subject": "ARTT",
                "scheduleTypeDescription": "Studio",
                "courseTitle": "Drawing I",
                "creditHours": 1.0,
                "maximumEnrollment": 12,
                "enrollment": 12,
                "seatsAvailable": 0,
                "meetingsFaculty": [{
                    "category": "01",
                    "courseReferenceNumber": "10001",
                    "meetingTime": {
                        "beginTime": null,
                        "endTime": null,
                        "building": null,
                        "buildingDescription": null,
                        "room": null,
                        "category": "01",
                        "courseReferenceNumber": "10001",
                        "monday": false
                    }
                }]
            }]
        });

        let page: CatalogPage = serde_json::from_value(body).unwrap();
        let course = &page.data[0];
        assert!(course.faculty.is_empty());
        assert!(course.section_attributes.is_empty());
        let meeting = &course.meetings_faculty[0].meeting_time;
        assert_eq!(meeting.building, None);
        assert_eq!(meeting.start_date, "");
        assert_eq!(meeting.hours_week, 0.0);
    }

    #[test]
    fn test_dataset_serializes_with_envelope_keys() {
        let page: CatalogPage = serde_json::from_value(serde_json::json!({
            "totalCount": 1,
            "data": [{
                "id": 7,
                "courseReferenceNumber": "10001",
                "courseNumber": "001",
                "subject": "ARTT",
                "scheduleTypeDescription": "Studio",
                "courseTitle": "Drawing I",
                "creditHours": 1.0,
                "maximumEnrollment": 12,
                "enrollment": 12,
                "seatsAvailable": 0
            }]
        }))
        .unwrap();

        let mut data = page.data;
        data[0].description = "Charcoal and graphite.".to_string();
        let dataset = Dataset { total_count: 1, data };

        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["totalCount"], 1);
        assert_eq!(value["data"][0]["courseReferenceNumber"], "10001");
        assert_eq!(value["data"][0]["description"], "Charcoal and graphite.");
    }
}
