pub mod apply;
pub mod changes;
pub mod entries;
pub mod init;
pub mod run;
pub mod warnings;
