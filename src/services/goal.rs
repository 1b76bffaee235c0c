//! Goal service

use crate::audit::EntityType;
use crate::error::KakeiboResult;
use crate::models::Goal;
use crate::storage::Storage;

use super::form::GoalForm;
use super::Added;

/// Service for savings goals
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate the form and append the resulting goal
    ///
    /// Once the row is saved, an audit log failure is returned in the
    /// [`Added`] rather than as an error.
    pub fn add(&self, form: &GoalForm) -> KakeiboResult<Added<Goal>> {
        let goal = form.validate()?;

        self.storage.goals.append(goal.clone())?;
        let audit_error = self
            .storage
            .log_added(EntityType::Goal, goal.name.clone(), &goal)
            .err();

        Ok(Added {
            record: goal,
            audit_error,
        })
    }

    /// All goals in the order they were added
    pub fn list(&self) -> KakeiboResult<Vec<Goal>> {
        self.storage.goals.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KakeiboPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        service
            .add(&GoalForm::new("Bike", "800", "2024-09-01", "150"))
            .unwrap();
        service
            .add(&GoalForm::new("Trip", "2000", "2025-06-01", "0"))
            .unwrap();

        let goals = service.list().unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].name, "Bike");
        assert_eq!(goals[1].name, "Trip");
        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_audit_failure_keeps_saved_goal() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let service = GoalService::new(&storage);

        let added = service
            .add(&GoalForm::new("Bike", "800", "2024-09-01", "150"))
            .unwrap();

        assert!(added.audit_error.is_some());
        assert_eq!(added.record.name, "Bike");
        assert_eq!(service.list().unwrap().len(), 1);
        assert!(std::fs::read_to_string(storage.paths().goals_file())
            .unwrap()
            .ends_with("Bike,800.00,2024-09-01,150.00\n"));
    }

    #[test]
    fn test_rejected_goal_mutates_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let err = service
            .add(&GoalForm::new("Bike", "eight hundred", "2024-09-01", "150"))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(service.list().unwrap().is_empty());
        assert_eq!(
            std::fs::read_to_string(storage.paths().goals_file()).unwrap(),
            "Goal Name,Target Amount,Target Date,Amount Saved\n"
        );
    }
}
