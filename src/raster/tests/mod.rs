mod band_tests;
