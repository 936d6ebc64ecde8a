use super::*;

use crate::DbReadOnly;

impl EstablishmentRepo for DbReadOnly<'_> {
    fn create_establishment(&self, addr: &Address) -> Result<()> {
        repo_impl::create_establishment(&mut self.sqlite_conn(), addr)
    }

    fn get_establishment(&self, id: &str) -> Result<Address> {
        repo_impl::get_establishment(&mut self.sqlite_conn(), id)
    }

    fn delete_establishment(&self, id: &str) -> Result<u64> {
        repo_impl::delete_establishment(&mut self.sqlite_conn(), id)
    }

    fn search_establishments(&self, criteria: &SearchCriteria) -> Result<Vec<Address>> {
        repo_impl::search_establishments(&mut self.sqlite_conn(), criteria)
    }

    fn nearest_establishment(&self, center: MapPoint, max_distance: Distance) -> Result<Id> {
        repo_impl::nearest_establishment(&mut self.sqlite_conn(), center, max_distance)
    }

    fn count_establishments(&self) -> Result<u64> {
        repo_impl::count_establishments(&mut self.sqlite_conn())
    }
}

impl DeliveryRepo for DbReadOnly<'_> {
    fn create_delivery(&self, delivery: &Delivery) -> Result<()> {
        repo_impl::create_delivery(&mut self.sqlite_conn(), delivery)
    }

    fn all_deliveries_of_user(&self, user_id: UserId) -> Result<Vec<Delivery>> {
        repo_impl::all_deliveries_of_user(&mut self.sqlite_conn(), user_id)
    }

    fn get_delivery(&self, user_id: UserId, id: &str) -> Result<Delivery> {
        repo_impl::get_delivery(&mut self.sqlite_conn(), user_id, id)
    }

    fn mark_delivery_deleted(&self, user_id: UserId, id: &str) -> Result<u64> {
        repo_impl::mark_delivery_deleted(&mut self.sqlite_conn(), user_id, id)
    }
}
