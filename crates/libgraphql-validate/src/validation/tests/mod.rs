mod default_values_of_correct_type_tests;
mod scalar_leafs_tests;
