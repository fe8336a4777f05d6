mod project_directory;

pub use project_directory::ResourceManagerProjects;
