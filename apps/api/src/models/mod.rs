pub mod consultant;
