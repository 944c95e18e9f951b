
#[derive(Debug)]
pub enum PathPlannerError {
    NoPathFound, // Unable to find a path to the goal
}

#[derive(Debug)]
pub enum GraphLoadError {
    Io(String), // Reading the edge description failed partway through
}


impl From<std::io::Error> for GraphLoadError {
    fn from(error: std::io::Error) -> Self {
        GraphLoadError::Io(error.to_string())
    }
}
