use box_office_scatter::application::LoadDatasetUseCase;
use box_office_scatter::domain::errors::AppError;
use box_office_scatter::domain::movie_data::{MovieDataRepository, MovieDataset, MovieRecord};
use box_office_scatter::infrastructure::parse_movie_csv;
use futures::executor::block_on;

struct CsvFixture(&'static str);

impl MovieDataRepository for CsvFixture {
    async fn load_dataset(&self) -> Result<MovieDataset, AppError> {
        parse_movie_csv(self.0)
    }

    fn describe(&self) -> String {
        "fixture".to_string()
    }
}

struct Offline;

impl MovieDataRepository for Offline {
    async fn load_dataset(&self) -> Result<MovieDataset, AppError> {
        Err(AppError::DataLoad("HTTP error: 404 - Not Found".to_string()))
    }

    fn describe(&self) -> String {
        "offline".to_string()
    }
}

#[test]
fn loads_records_from_repository() {
    let use_case = LoadDatasetUseCase::new(CsvFixture(
        "year,tickets_sold,total_revenue,ticket_price,cinema_sites\n2017,1236,11072,8.97,40246\n",
    ));

    let dataset = block_on(use_case.execute()).unwrap();

    assert_eq!(dataset.records(), &[MovieRecord::new(2017.0, 1236.0, 11072.0, 8.97, 40246.0)]);
}

#[test]
fn load_failure_is_propagated() {
    let error = block_on(LoadDatasetUseCase::new(Offline).execute()).unwrap_err();
    assert_eq!(error.to_string(), "Data Load Error: HTTP error: 404 - Not Found");
}

#[test]
fn header_only_csv_is_a_validation_error() {
    let use_case = LoadDatasetUseCase::new(CsvFixture("year,tickets_sold\n"));
    assert!(matches!(block_on(use_case.execute()), Err(AppError::Validation(_))));
}
