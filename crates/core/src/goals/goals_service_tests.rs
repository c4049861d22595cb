#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result, ValidationError};
    use crate::goals::{
        FundsAdjustment, Goal, GoalId, GoalRepositoryTrait, GoalService, GoalServiceTrait,
        GoalUpdate, NewGoal, Pagination,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, RwLock};

    // ============== Mock Repository ==============

    #[derive(Default)]
    struct MockGoalRepository {
        goals: RwLock<Vec<Goal>>,
        calls: AtomicUsize,
    }

    impl MockGoalRepository {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn stored(&self) -> Vec<Goal> {
            self.goals.read().unwrap().clone()
        }

        fn touch(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn list_goals(&self, page: Pagination) -> Result<Vec<Goal>> {
            self.touch();
            Ok(self
                .goals
                .read()
                .unwrap()
                .iter()
                .skip(page.skip as usize)
                .take(page.limit as usize)
                .cloned()
                .collect())
        }

        fn get_goal(&self, goal_id: &GoalId) -> Result<Option<Goal>> {
            self.touch();
            Ok(self
                .goals
                .read()
                .unwrap()
                .iter()
                .find(|g| &g.id == goal_id)
                .cloned())
        }

        async fn insert_goal(&self, new_goal: NewGoal) -> Result<GoalId> {
            self.touch();
            let id = GoalId::generate();
            self.goals.write().unwrap().push(Goal {
                id,
                name: new_goal.name,
                target_amount: new_goal.target_amount,
                current_amount: new_goal.current_amount,
            });
            Ok(id)
        }

        async fn replace_goal(&self, goal_id: GoalId, update: GoalUpdate) -> Result<usize> {
            self.touch();
            let mut goals = self.goals.write().unwrap();
            match goals.iter_mut().find(|g| g.id == goal_id) {
                Some(goal) => {
                    goal.name = update.name;
                    goal.target_amount = update.target_amount;
                    goal.current_amount = update.current_amount;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn set_current_amount(&self, goal_id: GoalId, current_amount: f64) -> Result<usize> {
            self.touch();
            let mut goals = self.goals.write().unwrap();
            match goals.iter_mut().find(|g| g.id == goal_id) {
                Some(goal) => {
                    goal.current_amount = current_amount;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete_goal(&self, goal_id: GoalId) -> Result<usize> {
            self.touch();
            let mut goals = self.goals.write().unwrap();
            let before = goals.len();
            goals.retain(|g| g.id != goal_id);
            Ok(before - goals.len())
        }
    }

    fn setup() -> (GoalService, Arc<MockGoalRepository>) {
        let repo = Arc::new(MockGoalRepository::default());
        (GoalService::new(repo.clone()), repo)
    }

    fn trip() -> NewGoal {
        NewGoal {
            name: "Trip".to_string(),
            target_amount: 1000.0,
            current_amount: 200.0,
        }
    }

    fn assert_not_found(err: Error) {
        assert!(
            matches!(err, Error::Database(DatabaseError::NotFound(_))),
            "expected not found, got {err:?}"
        );
    }

    fn assert_invalid_id(err: Error) {
        assert!(
            matches!(err, Error::Validation(ValidationError::InvalidGoalId(_))),
            "expected invalid id, got {err:?}"
        );
    }

    // ============== Tests ==============

    #[tokio::test]
    async fn test_create_then_get_round_trips_fields() {
        let (service, _) = setup();
        let id = service.create_goal(trip()).await.unwrap();

        let goal = service.get_goal(&id.to_string()).unwrap();
        assert_eq!(goal.id, id);
        assert_eq!(goal.name, "Trip");
        assert_eq!(goal.target_amount, 1000.0);
        assert_eq!(goal.current_amount, 200.0);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_amounts_before_store_access() {
        let (service, repo) = setup();

        let mut bad_target = trip();
        bad_target.target_amount = 0.0;
        let mut bad_current = trip();
        bad_current.current_amount = -1.0;

        for goal in [bad_target, bad_current] {
            let err = service.create_goal(goal).await.unwrap_err();
            assert!(matches!(
                err,
                Error::Validation(ValidationError::InvalidField { .. })
            ));
        }
        assert_eq!(repo.calls(), 0);
        assert!(repo.stored().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_ids_are_rejected_without_store_access() {
        let (service, repo) = setup();

        assert_invalid_id(service.get_goal("abc").unwrap_err());
        assert_invalid_id(
            service
                .update_goal("abc", trip().into())
                .await
                .unwrap_err(),
        );
        assert_invalid_id(
            service
                .adjust_funds("abc", FundsAdjustment { amount: 5.0 })
                .await
                .unwrap_err(),
        );
        assert_invalid_id(service.delete_goal("abc").await.unwrap_err());
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_well_formed_id_is_not_found() {
        let (service, _) = setup();
        let missing = GoalId::generate().to_string();

        assert_not_found(service.get_goal(&missing).unwrap_err());
        assert_not_found(service.update_goal(&missing, trip().into()).await.unwrap_err());
        assert_not_found(
            service
                .adjust_funds(&missing, FundsAdjustment { amount: 1.0 })
                .await
                .unwrap_err(),
        );
        assert_not_found(service.delete_goal(&missing).await.unwrap_err());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let (service, _) = setup();
        let id = service.create_goal(trip()).await.unwrap().to_string();

        let update = GoalUpdate {
            name: "House".to_string(),
            target_amount: 50_000.0,
            current_amount: 1_000.0,
        };
        service.update_goal(&id, update).await.unwrap();

        let goal = service.get_goal(&id).unwrap();
        assert_eq!(goal.name, "House");
        assert_eq!(goal.target_amount, 50_000.0);
        assert_eq!(goal.current_amount, 1_000.0);
    }

    #[tokio::test]
    async fn test_update_validates_amounts() {
        let (service, repo) = setup();
        let id = service.create_goal(trip()).await.unwrap().to_string();
        let calls_after_create = repo.calls();

        let update = GoalUpdate {
            name: "Trip".to_string(),
            target_amount: -10.0,
            current_amount: 0.0,
        };
        assert!(service.update_goal(&id, update).await.is_err());
        assert_eq!(repo.calls(), calls_after_create);
        assert_eq!(service.get_goal(&id).unwrap().target_amount, 1000.0);
    }

    #[tokio::test]
    async fn test_adjust_funds_trip_example() {
        let (service, _) = setup();
        let id = service.create_goal(trip()).await.unwrap().to_string();

        let amount = service
            .adjust_funds(&id, FundsAdjustment { amount: 50.0 })
            .await
            .unwrap();
        assert_eq!(amount, 250.0);

        let err = service
            .adjust_funds(&id, FundsAdjustment { amount: -300.0 })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InsufficientFunds { .. })
        ));
        assert_eq!(service.get_goal(&id).unwrap().current_amount, 250.0);

        service.delete_goal(&id).await.unwrap();
        assert_not_found(service.get_goal(&id).unwrap_err());
    }

    #[tokio::test]
    async fn test_adjust_funds_compounds_on_replay() {
        let (service, _) = setup();
        let id = service.create_goal(trip()).await.unwrap().to_string();

        for _ in 0..2 {
            service
                .adjust_funds(&id, FundsAdjustment { amount: 0.1 })
                .await
                .unwrap();
        }
        assert_eq!(service.get_goal(&id).unwrap().current_amount, 200.0 + 0.1 + 0.1);
    }

    #[tokio::test]
    async fn test_adjust_funds_rejects_zero_amount() {
        let (service, _) = setup();
        let id = service.create_goal(trip()).await.unwrap().to_string();

        let err = service
            .adjust_funds(&id, FundsAdjustment { amount: 0.0 })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidField { field: "amount", .. })
        ));
    }

    #[tokio::test]
    async fn test_adjust_funds_can_drain_to_zero() {
        let (service, _) = setup();
        let id = service.create_goal(trip()).await.unwrap().to_string();

        let amount = service
            .adjust_funds(&id, FundsAdjustment { amount: -200.0 })
            .await
            .unwrap();
        assert_eq!(amount, 0.0);
    }

    #[tokio::test]
    async fn test_adjust_funds_overflow_leaves_goal_unchanged() {
        let (service, repo) = setup();
        let huge = NewGoal {
            name: "Huge".to_string(),
            target_amount: 1.0,
            current_amount: 1.7e308,
        };
        let id = service.create_goal(huge).await.unwrap().to_string();

        let err = service
            .adjust_funds(&id, FundsAdjustment { amount: 1.7e308 })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));
        assert_eq!(repo.stored()[0].current_amount, 1.7e308);
    }

    #[tokio::test]
    async fn test_list_goals_paginates_in_insertion_order() {
        let (service, _) = setup();
        let mut ids = Vec::new();
        for i in 0..5 {
            let goal = NewGoal {
                name: format!("Goal {i}"),
                target_amount: 100.0,
                current_amount: 0.0,
            };
            ids.push(service.create_goal(goal).await.unwrap());
        }

        let all = service.list_goals(Pagination::default()).unwrap();
        assert_eq!(all.iter().map(|g| g.id).collect::<Vec<_>>(), ids);

        let page = service.list_goals(Pagination { limit: 2, skip: 3 }).unwrap();
        assert_eq!(page.iter().map(|g| g.id).collect::<Vec<_>>(), ids[3..].to_vec());

        assert!(service.list_goals(Pagination { limit: 10, skip: 10 }).unwrap().is_empty());
        assert!(service.list_goals(Pagination { limit: 0, skip: 0 }).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_totals_sum_visible_goals() {
        let (service, _) = setup();
        service.create_goal(trip()).await.unwrap();
        service
            .create_goal(NewGoal {
                name: "Car".to_string(),
                target_amount: 2500.567,
                current_amount: 10.004,
            })
            .await
            .unwrap();

        let totals = service.get_totals().unwrap();
        assert!((totals.current_total - 210.0).abs() < 1e-9);
        assert!((totals.target_total - 3500.57).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_totals_without_goals_is_not_found() {
        let (service, _) = setup();
        assert_not_found(service.get_totals().unwrap_err());
    }

    #[tokio::test]
    async fn test_totals_only_cover_first_page() {
        let (service, _) = setup();
        for i in 0..101 {
            service
                .create_goal(NewGoal {
                    name: format!("Goal {i}"),
                    target_amount: 1.0,
                    current_amount: 1.0,
                })
                .await
                .unwrap();
        }

        let totals = service.get_totals().unwrap();
        assert_eq!(totals.current_total, 100.0);
        assert_eq!(totals.target_total, 100.0);
    }

    #[tokio::test]
    async fn test_totals_overflow_is_an_error() {
        let (service, _) = setup();
        for name in ["A", "B"] {
            service
                .create_goal(NewGoal {
                    name: name.to_string(),
                    target_amount: 1.0,
                    current_amount: 1.7e308,
                })
                .await
                .unwrap();
        }

        let err = service.get_totals().unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));
    }
}
