pub mod group_sorting;
pub mod team_balancer;
