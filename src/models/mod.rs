pub mod meal;
pub mod object_id;
pub mod patient;
pub mod staff;

pub use meal::*;
pub use patient::*;
pub use staff::*;

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, to_document, Bson};
    use serde_json::json;

    #[test]
    fn test_meal_references_become_object_ids() {
        let patient = ObjectId::new();
        let meal: Meal = serde_json::from_value(json!({
            "patientId": patient.to_hex(),
            "status": "pending",
            "morningMeal": "Oatmeal"
        }))
        .unwrap();

        assert_eq!(meal.patient_id, Some(patient));
        assert_eq!(meal.status, Some(MealStatus::Pending));

        let document = to_document(&meal).unwrap();
        assert_eq!(document.get("patientId"), Some(&Bson::ObjectId(patient)));
        assert_eq!(document.get_str("status").unwrap(), "pending");
        assert_eq!(document.get_str("morningMeal").unwrap(), "Oatmeal");
        // Absent fields are not written
        assert!(!document.contains_key("eveningMeal"));
        assert_eq!(document.len(), 3);
    }

    #[test]
    fn test_malformed_reference_is_rejected() {
        let result = serde_json::from_value::<Meal>(json!({ "patientId": "p1" }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("not a valid identifier"), "{}", err);

        let result = serde_json::from_value::<PantryStaff>(json!({
            "assignedTasks": [ObjectId::new().to_hex(), "nope"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_status_and_fields_are_rejected() {
        assert!(serde_json::from_value::<Meal>(json!({ "status": "burnt" })).is_err());
        assert!(serde_json::from_value::<Patient>(json!({ "name": "A", "ward": 3 })).is_err());
        assert!(serde_json::from_value::<Patient>(json!({ "name": 42 })).is_err());
    }

    #[test]
    fn test_staff_task_list() {
        let tasks = vec![ObjectId::new(), ObjectId::new()];
        let staff: DeliveryPersonnel = serde_json::from_value(json!({
            "name": "C",
            "assignedTasks": tasks.iter().map(|id| id.to_hex()).collect::<Vec<_>>()
        }))
        .unwrap();

        assert_eq!(staff.assigned_tasks, Some(tasks.clone()));
        let document = to_document(&staff).unwrap();
        let stored = document.get_array("assignedTasks").unwrap();
        assert_eq!(stored, &tasks.into_iter().map(Bson::ObjectId).collect::<Vec<_>>());
    }

    #[test]
    fn test_status_names() {
        for status in MealStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
    }
}
