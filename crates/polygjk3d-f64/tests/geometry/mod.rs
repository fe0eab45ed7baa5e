mod tetrahedron_tetrahedron;
