pub mod simulation_routes;
