mod order;
mod report;
