//! Call-tracking test doubles for the repository ports.

mod mock_area_code_factory;
mod mock_unit_of_work;

pub use mock_area_code_factory::MockAreaCodeFactory;
pub use mock_unit_of_work::RecordingUnitOfWorkFactory;
